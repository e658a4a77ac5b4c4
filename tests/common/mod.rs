#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the ghlang binary.
#[macro_export]
macro_rules! ghlang {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ghlang"))
    };
}

/// Creates an `assert_cmd` Command for the tokount helper.
#[macro_export]
macro_rules! tokount {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tokount"))
    };
}

/// Path of the helper binary built alongside the tests.
pub fn tokount_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tokount"))
}

/// A temp workspace with a source tree, an output dir and a config file.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content under `src/`.
    pub fn create_source(&self, relative_path: &str, content: &str) {
        self.create_file(&format!("src/{relative_path}"), content);
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn source_dir(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Writes a config pointing the helper at the freshly built `tokount`
    /// and the output at this fixture, followed by `extra`.
    pub fn create_config(&self, extra: &str) {
        self.create_config_with("", extra);
    }

    /// Like [`TestFixture::create_config`], with additional `[tokount]` keys.
    pub fn create_config_with(&self, tokount_keys: &str, extra: &str) {
        let content = format!(
            "[tokount]\nbinary = {binary}\n{tokount_keys}\n[output]\ndirectory = {out}\n\n{extra}",
            binary = toml_string(&tokount_path()),
            out = toml_string(&self.output_dir()),
        );
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name)).expect("Failed to read output")
    }
}

/// Literal TOML string for a path, safe for Windows separators.
fn toml_string(path: &Path) -> String {
    format!("'{}'", path.display())
}
