use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

/// Write `value` as pretty-printed JSON, creating parent directories.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = to_pretty_json(value)?;
    fs::write(path, json)?;
    debug!("Saved {}", path.display());
    Ok(())
}

/// Pretty JSON with a trailing newline, as printed by `--stdout`.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
