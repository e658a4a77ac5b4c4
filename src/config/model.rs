use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AFFILIATION: &str = "owner,collaborator,organization_member";
pub const DEFAULT_OUTPUT_DIR: &str = "~/Documents/ghlang-stats";
pub const DEFAULT_TOP_N: usize = 5;
pub const TOKEN_PLACEHOLDER: &str = "YOUR_TOKEN_HERE";

/// Directory names skipped by local scans unless configured otherwise.
pub const DEFAULT_IGNORED_DIRS: &[&str] =
    &["node_modules", "vendor", ".git", "dist", "build", "__pycache__"];

const REDACTED: &str = "********";

/// Which repositories `/user/repos` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    All,
    Public,
    Private,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Raw TOML model; every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub github: GithubSection,
    #[serde(alias = "cloc")]
    pub tokount: TokountSection,
    pub output: OutputSection,
    pub preferences: PreferencesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GithubSection {
    pub token: Option<String>,
    pub affiliation: Option<String>,
    pub visibility: Option<Visibility>,
    pub ignored_repos: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokountSection {
    pub ignored_dirs: Option<Vec<String>>,
    /// Explicit path to the line-counting helper.
    pub binary: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub directory: Option<String>,
    pub save_json: Option<bool>,
    pub save_repos: Option<bool>,
    pub top_n_languages: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesSection {
    pub verbose: Option<bool>,
    pub theme: Option<Theme>,
}

/// Effective configuration after defaults, file values and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub token: String,
    pub affiliation: String,
    pub visibility: Visibility,
    pub ignored_repos: Vec<String>,
    pub ignored_dirs: Vec<String>,
    pub tokount_binary: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub save_json: bool,
    pub save_repos: bool,
    pub top_n_languages: usize,
    pub verbose: bool,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            affiliation: DEFAULT_AFFILIATION.to_string(),
            visibility: Visibility::default(),
            ignored_repos: Vec::new(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|d| (*d).to_string()).collect(),
            tokount_binary: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            save_json: true,
            save_repos: true,
            top_n_languages: DEFAULT_TOP_N,
            verbose: false,
            theme: Theme::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub token: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub top_n_languages: Option<usize>,
    pub save_json: Option<bool>,
    pub verbose: Option<bool>,
    pub theme: Option<Theme>,
}

impl Config {
    /// Layer the file's values over the defaults. `output_dir` is returned
    /// unexpanded; the loader resolves `~`.
    #[must_use]
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let ConfigFile {
            github,
            tokount,
            output,
            preferences,
        } = file;

        Self {
            token: normalize_token(github.token.unwrap_or_default()),
            affiliation: github.affiliation.unwrap_or(defaults.affiliation),
            visibility: github.visibility.unwrap_or(defaults.visibility),
            ignored_repos: github.ignored_repos.unwrap_or(defaults.ignored_repos),
            ignored_dirs: tokount.ignored_dirs.unwrap_or(defaults.ignored_dirs),
            tokount_binary: tokount.binary,
            output_dir: output
                .directory
                .map_or(defaults.output_dir, PathBuf::from),
            save_json: output.save_json.unwrap_or(defaults.save_json),
            save_repos: output.save_repos.unwrap_or(defaults.save_repos),
            top_n_languages: output.top_n_languages.unwrap_or(defaults.top_n_languages),
            verbose: preferences.verbose.unwrap_or(defaults.verbose),
            theme: preferences.theme.unwrap_or(defaults.theme),
        }
    }

    /// Apply command-line values on top of the file configuration.
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(token) = &overrides.token {
            self.token = normalize_token(token.clone());
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir.clone_from(dir);
        }
        if let Some(top_n) = overrides.top_n_languages {
            self.top_n_languages = top_n;
        }
        if let Some(save_json) = overrides.save_json {
            self.save_json = save_json;
        }
        if let Some(verbose) = overrides.verbose {
            self.verbose = verbose;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Copy safe to print: a configured token is masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.has_token() {
            copy.token = REDACTED.to_string();
        }
        copy
    }
}

/// Blank and placeholder tokens both mean "no token".
fn normalize_token(token: String) -> String {
    let trimmed = token.trim();
    if trimmed.is_empty() || trimmed == TOKEN_PLACEHOLDER {
        String::new()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
