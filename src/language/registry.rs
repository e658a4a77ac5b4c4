use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub filenames: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            filenames: Vec::new(),
            comment_syntax,
        }
    }

    #[must_use]
    pub fn with_filenames(mut self, filenames: Vec<&str>) -> Self {
        self.filenames = filenames.into_iter().map(String::from).collect();
        self
    }
}

/// Extension and filename lookup for the languages `tokount` understands.
///
/// Names follow the line-counter conventions (e.g. `C Header`,
/// `Bourne Shell`); they are mapped to linguist names downstream.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    filename_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            filename_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for ext in &language.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        for name in &language.filenames {
            self.filename_map.insert(name.clone(), idx);
        }
        self.languages.push(language);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(&ext.to_ascii_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Classify a file by exact filename first, then by extension.
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<&Language> {
        if let Some(&idx) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.filename_map.get(n))
        {
            return Some(&self.languages[idx]);
        }
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.get_by_extension(e))
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for builtin in BUILTIN {
            registry.register(
                Language::new(
                    builtin.name,
                    builtin.extensions.to_vec(),
                    CommentSyntax::new(builtin.line.to_vec(), builtin.block.to_vec()),
                )
                .with_filenames(builtin.filenames.to_vec()),
            );
        }
        registry
    }
}

/// One row of the built-in language table.
struct Builtin {
    name: &'static str,
    extensions: &'static [&'static str],
    filenames: &'static [&'static str],
    line: &'static [&'static str],
    block: &'static [(&'static str, &'static str)],
}

const fn lang(
    name: &'static str,
    extensions: &'static [&'static str],
    line: &'static [&'static str],
    block: &'static [(&'static str, &'static str)],
) -> Builtin {
    Builtin {
        name,
        extensions,
        filenames: &[],
        line,
        block,
    }
}

impl Builtin {
    const fn files(mut self, filenames: &'static [&'static str]) -> Self {
        self.filenames = filenames;
        self
    }
}

const SLASH: &[&str] = &["//"];
const HASH: &[&str] = &["#"];
const DASH: &[&str] = &["--"];
const SEMI: &[&str] = &[";"];
const PERCENT: &[&str] = &["%"];
const NO_LINE: &[&str] = &[];

const C_BLOCK: &[(&str, &str)] = &[("/*", "*/")];
const HTML_BLOCK: &[(&str, &str)] = &[("<!--", "-->")];
const PY_BLOCK: &[(&str, &str)] = &[("'''", "'''"), ("\"\"\"", "\"\"\"")];
const ML_BLOCK: &[(&str, &str)] = &[("(*", "*)")];
const HASKELL_BLOCK: &[(&str, &str)] = &[("{-", "-}")];
const NO_BLOCK: &[(&str, &str)] = &[];

// Names are what the line counter reports; `normalize` maps the few that
// differ from linguist.
const BUILTIN: &[Builtin] = &[
    // Systems
    lang("Rust", &["rs"], &["//", "///", "//!"], C_BLOCK),
    lang("Go", &["go"], SLASH, C_BLOCK),
    lang("C", &["c"], SLASH, C_BLOCK),
    lang("C Header", &["h"], SLASH, C_BLOCK),
    lang("C++", &["cpp", "cc", "cxx", "c++", "ino"], SLASH, C_BLOCK),
    lang("C++ Header", &["hpp", "hh", "hxx", "h++", "inl"], SLASH, C_BLOCK),
    lang("Objective-C", &["m"], SLASH, C_BLOCK),
    lang("Objective-C++", &["mm"], SLASH, C_BLOCK),
    lang("Zig", &["zig"], SLASH, NO_BLOCK),
    lang("D", &["d"], SLASH, &[("/*", "*/"), ("/+", "+/")]),
    lang("Nim", &["nim", "nims"], HASH, &[("#[", "]#")]),
    lang("Odin", &["odin"], SLASH, C_BLOCK),
    lang("Crystal", &["cr"], HASH, NO_BLOCK),
    lang("Fortran", &["f", "for", "f77", "f90", "f95", "f03", "f08"], &["!"], NO_BLOCK),
    lang("Ada", &["adb", "ads"], DASH, NO_BLOCK),
    lang("Pascal", &["pas", "dpr", "lpr"], SLASH, &[("{", "}"), ("(*", "*)")]),
    lang("COBOL", &["cob", "cbl", "cpy"], &["*>"], NO_BLOCK),
    lang("Assembly", &["asm", "s", "nasm"], &[";", "#"], C_BLOCK),
    lang("CUDA", &["cu", "cuh"], SLASH, C_BLOCK),
    lang("GLSL", &["glsl", "vert", "frag", "geom", "comp", "tesc", "tese"], SLASH, C_BLOCK),
    lang("HLSL", &["hlsl", "fx"], SLASH, C_BLOCK),
    lang("Metal", &["metal"], SLASH, C_BLOCK),
    lang("WebAssembly", &["wat", "wast"], &[";;"], &[("(;", ";)")]),
    lang("Verilog", &["v"], SLASH, C_BLOCK),
    lang("SystemVerilog", &["sv", "svh"], SLASH, C_BLOCK),
    lang("VHDL", &["vhd", "vhdl"], DASH, NO_BLOCK),
    // JVM and .NET
    lang("Java", &["java"], SLASH, C_BLOCK),
    lang("Kotlin", &["kt", "kts"], SLASH, C_BLOCK),
    lang("Scala", &["scala", "sc"], SLASH, C_BLOCK),
    lang("Groovy", &["groovy", "gvy", "gradle"], SLASH, C_BLOCK)
        .files(&["Jenkinsfile"]),
    lang("Clojure", &["clj", "cljs", "cljc", "edn"], SEMI, NO_BLOCK),
    lang("C#", &["cs", "csx"], SLASH, C_BLOCK),
    lang("F#", &["fs", "fsi", "fsx"], SLASH, ML_BLOCK),
    lang("Visual Basic .NET", &["vb"], &["'"], NO_BLOCK),
    lang("Razor", &["cshtml", "razor"], NO_LINE, &[("@*", "*@"), ("<!--", "-->")]),
    // Scripting
    lang("Python", &["py", "pyi", "pyw"], HASH, PY_BLOCK),
    lang("Cython", &["pyx", "pxd"], HASH, PY_BLOCK),
    lang("Mojo", &["mojo"], HASH, PY_BLOCK),
    lang("Ruby", &["rb", "rake", "gemspec", "ru"], HASH, &[("=begin", "=end")])
        .files(&["Gemfile", "Rakefile", "Vagrantfile"]),
    lang("Perl", &["pl", "pm"], HASH, &[("=pod", "=cut")]),
    lang("Raku", &["raku", "rakumod", "p6"], HASH, NO_BLOCK),
    lang("PHP", &["php", "phtml"], &["//", "#"], C_BLOCK),
    lang("Hack", &["hack", "hhi"], SLASH, C_BLOCK),
    lang("Lua", &["lua"], DASH, &[("--[[", "]]")]),
    lang("Luau", &["luau"], DASH, &[("--[[", "]]")]),
    lang("R", &["r", "rmd"], HASH, NO_BLOCK),
    lang("Julia", &["jl"], HASH, &[("#=", "=#")]),
    lang("Tcl", &["tcl"], HASH, NO_BLOCK),
    lang("Awk", &["awk"], HASH, NO_BLOCK),
    lang("Vim Script", &["vim"], &["\""], NO_BLOCK).files(&[".vimrc", "_vimrc"]),
    lang("Emacs Lisp", &["el"], SEMI, NO_BLOCK),
    lang("Common Lisp", &["lisp", "lsp", "cl"], SEMI, &[("#|", "|#")]),
    lang("Scheme", &["scm", "ss"], SEMI, &[("#|", "|#")]),
    lang("Racket", &["rkt"], SEMI, &[("#|", "|#")]),
    lang("Fennel", &["fnl"], SEMI, NO_BLOCK),
    lang("Janet", &["janet"], HASH, NO_BLOCK),
    lang("GDScript", &["gd"], HASH, NO_BLOCK),
    lang("AutoHotkey", &["ahk"], SEMI, C_BLOCK),
    lang("AppleScript", &["applescript"], DASH, ML_BLOCK),
    // Functional
    lang("Haskell", &["hs"], DASH, HASKELL_BLOCK),
    lang("Elm", &["elm"], DASH, HASKELL_BLOCK),
    lang("PureScript", &["purs"], DASH, HASKELL_BLOCK),
    lang("Idris", &["idr"], DASH, HASKELL_BLOCK),
    lang("Agda", &["agda"], DASH, HASKELL_BLOCK),
    lang("Lean", &["lean"], DASH, &[("/-", "-/")]),
    lang("OCaml", &["ml", "mli"], NO_LINE, ML_BLOCK),
    lang("Standard ML", &["sml"], NO_LINE, ML_BLOCK),
    lang("Reason", &["re", "rei"], SLASH, C_BLOCK),
    lang("ReScript", &["res", "resi"], SLASH, C_BLOCK),
    lang("Elixir", &["ex", "exs"], HASH, NO_BLOCK),
    lang("Erlang", &["erl", "hrl"], PERCENT, NO_BLOCK),
    lang("Gleam", &["gleam"], SLASH, NO_BLOCK),
    // Mobile and app
    lang("Swift", &["swift"], SLASH, C_BLOCK),
    lang("Dart", &["dart"], SLASH, C_BLOCK),
    lang("Haxe", &["hx"], SLASH, C_BLOCK),
    lang("Vala", &["vala"], SLASH, C_BLOCK),
    lang("Solidity", &["sol"], SLASH, C_BLOCK),
    lang("Ballerina", &["bal"], SLASH, NO_BLOCK),
    lang("Chapel", &["chpl"], SLASH, C_BLOCK),
    lang("Pony", &["pony"], SLASH, C_BLOCK),
    // Web
    lang("JavaScript", &["js", "mjs", "cjs"], SLASH, C_BLOCK),
    lang("JSX", &["jsx"], SLASH, C_BLOCK),
    lang("TypeScript", &["ts", "mts", "cts"], SLASH, C_BLOCK),
    lang("TSX", &["tsx"], SLASH, C_BLOCK),
    lang("CoffeeScript", &["coffee"], HASH, &[("###", "###")]),
    lang("LiveScript", &["ls"], HASH, C_BLOCK),
    lang("ActionScript", &["as"], SLASH, C_BLOCK),
    lang("Vue", &["vue"], SLASH, &[("<!--", "-->"), ("/*", "*/")]),
    lang("Svelte", &["svelte"], SLASH, &[("<!--", "-->"), ("/*", "*/")]),
    lang("Astro", &["astro"], SLASH, &[("<!--", "-->"), ("/*", "*/")]),
    lang("HTML", &["html", "htm", "xhtml"], NO_LINE, HTML_BLOCK),
    lang("CSS", &["css"], NO_LINE, C_BLOCK),
    lang("SCSS", &["scss"], SLASH, C_BLOCK),
    lang("Sass", &["sass"], SLASH, C_BLOCK),
    lang("Less", &["less"], SLASH, C_BLOCK),
    lang("Stylus", &["styl"], SLASH, C_BLOCK),
    lang(
        "Handlebars",
        &["hbs", "handlebars"],
        NO_LINE,
        &[("{{!--", "--}}"), ("{{!", "}}")],
    ),
    lang("Twig", &["twig"], NO_LINE, &[("{#", "#}")]),
    lang("Liquid", &["liquid"], NO_LINE, &[("{% comment %}", "{% endcomment %}")]),
    lang("Pug", &["pug", "jade"], &["//-", "//"], NO_BLOCK),
    lang("GraphQL", &["graphql", "gql"], HASH, NO_BLOCK),
    // Shells
    lang("Bourne Shell", &["sh"], HASH, NO_BLOCK),
    lang("Bourne Again Shell", &["bash"], HASH, NO_BLOCK),
    lang("zsh", &["zsh"], HASH, NO_BLOCK),
    lang("Korn Shell", &["ksh"], HASH, NO_BLOCK),
    lang("C Shell", &["csh", "tcsh"], HASH, NO_BLOCK),
    lang("Fish", &["fish"], HASH, NO_BLOCK),
    lang("Nushell", &["nu"], HASH, NO_BLOCK),
    lang("PowerShell", &["ps1", "psm1", "psd1"], HASH, &[("<#", "#>")]),
    lang("Batchfile", &["bat", "cmd"], &["REM", "rem", "@REM", "@rem", "::"], NO_BLOCK),
    // Build, infra and schemas
    lang("Makefile", &["mk", "mak"], HASH, NO_BLOCK)
        .files(&["Makefile", "makefile", "GNUmakefile"]),
    lang("Dockerfile", &["dockerfile"], HASH, NO_BLOCK).files(&["Dockerfile", "Containerfile"]),
    lang("CMake", &["cmake"], HASH, &[("#[[", "]]")]).files(&["CMakeLists.txt"]),
    lang("Meson", &[], HASH, NO_BLOCK).files(&["meson.build", "meson_options.txt"]),
    lang("Just", &["just"], HASH, NO_BLOCK).files(&["justfile", "Justfile", ".justfile"]),
    lang("Starlark", &["bzl", "star"], HASH, NO_BLOCK)
        .files(&["BUILD", "BUILD.bazel", "WORKSPACE", "WORKSPACE.bazel", "Tiltfile"]),
    lang("Nix", &["nix"], HASH, C_BLOCK),
    lang("HCL", &["hcl", "tf", "tfvars"], &["#", "//"], C_BLOCK),
    lang("Jsonnet", &["jsonnet", "libsonnet"], &["//", "#"], C_BLOCK),
    lang("Rego", &["rego"], HASH, NO_BLOCK),
    lang("Protocol Buffer", &["proto"], SLASH, C_BLOCK),
    lang("Thrift", &["thrift"], &["//", "#"], C_BLOCK),
    lang("Prisma", &["prisma"], SLASH, NO_BLOCK),
    lang("SQL", &["sql"], DASH, C_BLOCK),
    lang("Yacc", &["y", "yy"], SLASH, C_BLOCK),
    lang("Lex", &["l", "lex"], SLASH, C_BLOCK),
    lang("TeX", &["tex", "sty"], PERCENT, NO_BLOCK),
    // Data and prose, dropped before charting
    lang("Markdown", &["md", "markdown"], NO_LINE, NO_BLOCK),
    lang("JSON", &["json"], NO_LINE, NO_BLOCK),
    lang("TOML", &["toml"], HASH, NO_BLOCK),
    lang("YAML", &["yml", "yaml"], HASH, NO_BLOCK),
    lang("XML", &["xml", "xsd", "xsl"], NO_LINE, HTML_BLOCK),
    lang("INI", &["ini", "cfg"], &[";", "#"], NO_BLOCK),
];

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
