use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhlangError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No GitHub token configured. Add one to {path} or set GITHUB_TOKEN")]
    MissingToken { path: PathBuf },

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Invalid repository name: {0}")]
    InvalidRepoName(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("tokount failed on {path}: {message}")]
    Helper { path: PathBuf, message: String },

    #[error("Couldn't find the tokount helper ({0}). Reinstall ghlang or set [tokount] binary")]
    HelperNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    NoData(String),
}

impl GhlangError {
    /// Errors raised while loading or validating configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
                | Self::MissingToken { .. }
                | Self::InvalidPattern { .. }
        )
    }

    /// Errors the per-repository aggregation loop skips over instead of aborting.
    #[must_use]
    pub const fn is_repo_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Request { .. } | Self::InvalidRepoName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GhlangError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
