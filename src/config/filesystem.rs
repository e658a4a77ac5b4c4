//! Filesystem abstraction for testability.

use std::path::{Path, PathBuf};

/// Filesystem operations used while loading configuration.
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Write a file, creating its parent directories.
    ///
    /// # Errors
    /// Returns an error if the directory or file cannot be created.
    fn write_creating_parents(&self, path: &Path, content: &str) -> std::io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Platform configuration directory for ghlang:
    /// - Linux: `~/.config/ghlang`
    /// - macOS: `~/Library/Application Support/ghlang`
    /// - Windows: `%APPDATA%\ghlang\config`
    fn config_dir(&self) -> Option<PathBuf>;

    fn home_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_creating_parents(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ghlang").map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}
