//! Mapping from line-counter language names to GitHub linguist names.

use super::LanguageTotals;

/// Look up a local tool's language name.
///
/// `None` means the name is not in the table. `Some(None)` means the language
/// is data or prose that GitHub does not count and must be dropped.
fn lookup(name: &str) -> Option<Option<&'static str>> {
    let mapped = match name {
        // Shells
        "Bourne Shell" | "Bourne Again Shell" | "BASH" | "Korn Shell" | "zsh" | "Zsh" | "Sh" => {
            Some("Shell")
        }
        "C Shell" => Some("Tcsh"),
        "DOS Batch" | "Batch" => Some("Batchfile"),

        // C family headers fold into their language
        "C Header" | "C/C++ Header" => Some("C"),
        "C++ Header" => Some("C++"),
        "Objective C++" => Some("Objective-C++"),
        "Objective C" => Some("Objective-C"),

        // Naming differences
        "JSX" => Some("JavaScript"),
        "TSX" => Some("TypeScript"),
        "Vuejs Component" => Some("Vue"),
        "vim script" | "VimScript" | "Vim script" => Some("Vim Script"),
        "Visual Basic" => Some("VBA"),
        "Jupyter Notebooks" => Some("Jupyter Notebook"),
        "Elisp" => Some("Emacs Lisp"),
        "GNU Style Assembly" => Some("Assembly"),
        "make" => Some("Makefile"),
        "Sass" => Some("SCSS"),
        "Protocol Buffers" => Some("Protocol Buffer"),
        "Razor" => Some("HTML+Razor"),

        // Data and prose: not part of GitHub's language breakdown
        "JSON" | "JSON5" | "YAML" | "TOML" | "XML" | "XSD" | "XSLT" | "CSV" | "INI" | "Markdown"
        | "Text" | "Plain Text" | "ReStructuredText" | "reStructuredText" | "AsciiDoc" | "SVG"
        | "Properties" => None,

        _ => return None,
    };
    Some(mapped)
}

/// Normalize a local language name to its linguist name.
///
/// Returns `None` when the language should be dropped. Names the table does
/// not know are assumed to be canonical already.
#[must_use]
pub fn normalize(name: &str) -> Option<&str> {
    match lookup(name) {
        Some(mapped) => mapped,
        None => Some(name),
    }
}

/// Normalize every key, dropping unrepresentable languages and summing
/// languages that collapse onto the same name.
#[must_use]
pub fn normalize_stats(raw: &LanguageTotals) -> LanguageTotals {
    let mut normalized = LanguageTotals::new();

    for (language, count) in raw {
        let Some(name) = normalize(language) else {
            continue;
        };
        *normalized.entry(name.to_string()).or_insert(0) += count;
    }

    normalized
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
