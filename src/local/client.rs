use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, info};

use super::stats::{DetailedStats, parse_helper_output};
use crate::error::{GhlangError, Result};

/// Executable name of the line-counting helper.
pub const HELPER_NAME: &str = "tokount";

#[derive(Deserialize)]
struct HelperFailure {
    error: HelperFailureBody,
}

#[derive(Deserialize)]
struct HelperFailureBody {
    kind: String,
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Runs the helper over local paths and collects its per-language counts.
#[derive(Debug, Clone)]
pub struct LocalClient {
    helper: PathBuf,
    ignored_dirs: Vec<String>,
    follow_links: bool,
}

impl LocalClient {
    /// Client using the helper found next to the running executable, or on `PATH`.
    #[must_use]
    pub fn new(ignored_dirs: Vec<String>) -> Self {
        Self {
            helper: locate_helper(),
            ignored_dirs,
            follow_links: false,
        }
    }

    /// Override the helper binary, typically from `[tokount] binary`.
    #[must_use]
    pub fn with_helper(mut self, helper: impl Into<PathBuf>) -> Self {
        self.helper = helper.into();
        self
    }

    /// Ask the helper to follow symlinks.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    #[must_use]
    pub fn helper(&self) -> &Path {
        &self.helper
    }

    /// Arguments passed to the helper for `path`.
    fn helper_args(&self, path: &Path) -> Vec<OsString> {
        let mut args = Vec::with_capacity(3);
        if self.follow_links {
            args.push(OsString::from("--follow-links"));
        }
        args.push(path.as_os_str().to_os_string());
        args.push(OsString::from(self.ignored_dirs.join(",")));
        args
    }

    /// Count one path.
    ///
    /// # Errors
    /// Returns [`GhlangError::HelperNotFound`] when the helper cannot be
    /// spawned, [`GhlangError::Helper`] when it exits non-zero, or a JSON
    /// error when its output is malformed.
    pub fn run_on_path(&self, path: &Path) -> Result<DetailedStats> {
        info!("Counting lines in {}", path.display());
        debug!("Running {} on {}", self.helper.display(), path.display());

        let output = Command::new(&self.helper)
            .args(self.helper_args(path))
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    GhlangError::HelperNotFound(self.helper.display().to_string())
                } else {
                    GhlangError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GhlangError::Helper {
                path: path.to_path_buf(),
                message: describe_failure(&stderr),
            });
        }

        parse_helper_output(&String::from_utf8_lossy(&output.stdout))
    }

    /// Count each path in order, failing on the first error.
    ///
    /// # Errors
    /// Same as [`LocalClient::run_on_path`].
    pub fn run_on_paths(&self, paths: &[PathBuf]) -> Result<Vec<DetailedStats>> {
        paths.iter().map(|p| self.run_on_path(p)).collect()
    }
}

/// Artifact name for the raw counts of one path.
///
/// A single path writes `cloc_stats.json`; several paths are numbered from 1
/// and suffixed with the path's final component.
#[must_use]
pub fn artifact_file_name(index: usize, total: usize, path: &Path) -> String {
    if total <= 1 {
        return "cloc_stats.json".to_string();
    }
    let name = dunce::canonicalize(path)
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| path.file_name())
        .map_or_else(|| "root".to_string(), |n| n.to_string_lossy().into_owned());
    format!("cloc_stats_{:02}_{name}.json", index + 1)
}

fn describe_failure(stderr: &str) -> String {
    match serde_json::from_str::<HelperFailure>(stderr.trim()) {
        Ok(HelperFailure { error }) => match error.details {
            Some(details) => format!("{} ({}): {details}", error.message, error.kind),
            None => format!("{} ({})", error.message, error.kind),
        },
        Err(_) if stderr.trim().is_empty() => "exited with an error".to_string(),
        Err(_) => stderr.trim().to_string(),
    }
}

fn locate_helper() -> PathBuf {
    let file_name = format!("{HELPER_NAME}{}", std::env::consts::EXE_SUFFIX);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(file_name))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
