//! Repository ignore patterns.
//!
//! Patterns come from `[github] ignored_repos` and may be plain `owner/repo`
//! globs or GitHub URLs. Matching follows shell-glob rules: `*`, `?`, `[...]`
//! and `[!...]` are special, `*` also crosses the `/` between owner and
//! repository, and everything else (braces, backslashes, a `[` that is never
//! closed) matches literally.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GhlangError, Result};

const URL_PREFIXES: [&str; 3] = ["https://github.com/", "http://github.com/", "github.com/"];
const MAX_OWNER_LEN: usize = 39;
const MAX_REPO_LEN: usize = 100;

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$").expect("Invalid regex"));

/// Strip a GitHub URL prefix and one trailing slash from an ignore pattern.
///
/// Patterns without a recognized prefix are returned unchanged.
#[must_use]
pub fn normalize_repo_pattern(pattern: &str) -> String {
    for prefix in URL_PREFIXES {
        if let Some(rest) = pattern.strip_prefix(prefix) {
            return rest.strip_suffix('/').unwrap_or(rest).to_string();
        }
    }
    pattern.to_string()
}

/// Check a repository against raw ignore patterns.
///
/// Patterns that cannot be compiled never match.
#[must_use]
pub fn should_ignore(full_name: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .filter_map(|pattern| CompiledPattern::new(pattern).ok())
        .any(|compiled| compiled.is_match(full_name))
}

/// Check that a name has the `owner/repo` shape GitHub accepts.
///
/// Owners are at most 39 characters and repository names at most 100.
#[must_use]
pub fn validate_repo_name(full_name: &str) -> bool {
    if !REPO_NAME.is_match(full_name) {
        return false;
    }
    full_name
        .split_once('/')
        .is_some_and(|(owner, repo)| owner.len() <= MAX_OWNER_LEN && repo.len() <= MAX_REPO_LEN)
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    exact: Option<Regex>,
    lowered: Option<Regex>,
}

impl CompiledPattern {
    fn new(pattern: &str) -> Result<Self> {
        let normalized = normalize_repo_pattern(pattern);
        Ok(Self {
            exact: compile_glob(&normalized)?,
            lowered: compile_glob(&normalized.to_lowercase())?,
        })
    }

    fn is_match(&self, full_name: &str) -> bool {
        self.exact.as_ref().is_some_and(|re| re.is_match(full_name))
            || self
                .lowered
                .as_ref()
                .is_some_and(|re| re.is_match(&full_name.to_lowercase()))
    }
}

/// Compile a glob into an anchored regex; `None` for a glob that can never
/// match, such as one containing the empty class `[z-a]`.
fn compile_glob(pattern: &str) -> Result<Option<Regex>> {
    let Some(translated) = translate_glob(pattern) else {
        return Ok(None);
    };
    Regex::new(&translated)
        .map(Some)
        .map_err(|source| GhlangError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn translate_glob(pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from(r"(?s)\A");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end])?);
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&escape_char(c)),
        }
    }

    out.push_str(r"\z");
    Some(out)
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A `!` and then a `]` right after the opening bracket belong to the body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

/// Regex class for a glob class body; `None` when it matches nothing.
fn translate_class(body: &[char]) -> Option<String> {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut items = String::new();
    let mut k = 0;
    while k < body.len() {
        let low = body[k];
        if body.get(k + 1) == Some(&'-') && k + 2 < body.len() {
            let high = body[k + 2];
            // Reversed ranges are empty
            if low <= high {
                items.push_str(&escape_char(low));
                items.push('-');
                items.push_str(&escape_char(high));
            }
            k += 3;
        } else {
            items.push_str(&escape_char(low));
            k += 1;
        }
    }

    match (items.is_empty(), negated) {
        (true, true) => Some(".".to_string()),
        (true, false) => None,
        (false, true) => Some(format!("[^{items}]")),
        (false, false) => Some(format!("[{items}]")),
    }
}

fn escape_char(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Ignore patterns compiled once for the whole repository listing.
#[derive(Debug, Clone, Default)]
pub struct RepoFilter {
    patterns: Vec<CompiledPattern>,
}

impl RepoFilter {
    /// Compile the configured patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a pattern is too large to compile.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| CompiledPattern::new(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn should_ignore(&self, full_name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(full_name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
