use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{CliOverrides, Config, ConfigFile};
use super::template::DEFAULT_CONFIG_TEMPLATE;
use crate::error::{GhlangError, Result};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Outcome of loading: the effective config and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    pub path: PathBuf,
    /// The file did not exist and was created from the template.
    pub created: bool,
}

/// Loads `config.toml`, creating it from the template when missing.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Platform config path, e.g. `~/.config/ghlang/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the platform has no home directory.
    pub fn default_path(&self) -> Result<PathBuf> {
        self.fs
            .config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .ok_or_else(|| GhlangError::Config("Couldn't determine the config directory".into()))
    }

    /// Load configuration and layer `overrides` on top.
    ///
    /// A missing file is created from the template first. With
    /// `require_token`, an absent or placeholder token (after overrides) is
    /// a [`GhlangError::MissingToken`].
    ///
    /// # Errors
    /// Returns a configuration error if the file cannot be created, read or
    /// parsed, or if a required token is missing.
    pub fn load(
        &self,
        path: Option<&Path>,
        overrides: &CliOverrides,
        require_token: bool,
    ) -> Result<LoadResult> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => self.default_path()?,
        };

        let created = !self.fs.exists(&path);
        if created {
            self.fs
                .write_creating_parents(&path, DEFAULT_CONFIG_TEMPLATE)
                .map_err(|source| GhlangError::ConfigRead {
                    path: path.clone(),
                    source,
                })?;
            info!("Created default config at {}", path.display());
        }

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| GhlangError::ConfigRead {
                path: path.clone(),
                source,
            })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| GhlangError::ConfigParse {
            path: path.clone(),
            source,
        })?;

        let mut config = Config::from_file(file);
        config.apply_overrides(overrides);
        config.output_dir = self.expand_tilde(&config.output_dir);
        if let Some(binary) = &config.tokount_binary {
            config.tokount_binary = Some(self.expand_tilde(binary));
        }

        if require_token && !config.has_token() {
            return Err(GhlangError::MissingToken { path });
        }

        debug!("Loaded config from {}", path.display());
        Ok(LoadResult {
            config,
            path,
            created,
        })
    }

    /// Replace a leading `~` with the home directory.
    fn expand_tilde(&self, path: &Path) -> PathBuf {
        let Ok(rest) = path.strip_prefix("~") else {
            return path.to_path_buf();
        };
        match self.fs.home_dir() {
            Some(home) if rest.as_os_str().is_empty() => home,
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
