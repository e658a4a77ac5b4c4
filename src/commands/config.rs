use std::path::PathBuf;

use crate::cli::ConfigArgs;
use crate::config::{CliOverrides, FileConfigLoader};
use crate::output::to_pretty_json;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match run_config_impl(args) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Text printed by `ghlang config`: the file path by default or with
/// `--path`, the effective settings as JSON with `--show`.
///
/// # Errors
/// Returns an error if the configuration cannot be located or loaded.
pub(crate) fn run_config_impl(args: &ConfigArgs) -> Result<String> {
    let loader = FileConfigLoader::new();
    let path: PathBuf = match &args.config {
        Some(path) => path.clone(),
        None => loader.default_path()?,
    };

    if !args.show {
        return Ok(format!("{}\n", path.display()));
    }

    let loaded = loader.load(Some(&path), &CliOverrides::default(), false)?;
    to_pretty_json(&loaded.config.redacted())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
