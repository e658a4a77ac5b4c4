//! Library side of the `tokount` helper: count a tree by language.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::counter::{LineCounter, LineStats};
use crate::error::{GhlangError, Result};
use crate::language::LanguageRegistry;
use crate::local::{DetailedStats, LanguageCounts, SUMMARY_KEY};
use crate::scanner::{DirectoryScanner, FileScanner};

/// Split the helper's comma-separated exclusion argument.
#[must_use]
pub fn parse_excluded_dirs(arg: Option<&str>) -> Vec<String> {
    arg.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// What the helper skips and whether it follows symlinks.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub excluded_dirs: Vec<String>,
    pub follow_links: bool,
}

/// Count blank, comment and code lines under `path`, grouped by language.
///
/// Languages without code lines are omitted. A `SUM` entry totals the rest.
/// Files that are unreadable, not UTF-8 text, or of an unknown language are
/// skipped.
///
/// # Errors
/// Returns an error if `path` does not exist.
pub fn count_path(path: &Path, options: &CountOptions) -> Result<DetailedStats> {
    if !path.exists() {
        return Err(GhlangError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }

    let registry = LanguageRegistry::default();
    let files = DirectoryScanner::new(options.excluded_dirs.iter().cloned())
        .with_follow_links(options.follow_links)
        .scan(path);
    debug!("Found {} files under {}", files.len(), path.display());

    let per_file: Vec<(&str, LineStats)> = files
        .par_iter()
        .filter_map(|file| {
            let language = registry.detect(file)?;
            let source = read_text(file)?;
            let stats = LineCounter::new(&language.comment_syntax).count(&source);
            Some((language.name.as_str(), stats))
        })
        .collect();

    let mut by_language = DetailedStats::new();
    for (name, stats) in per_file {
        let entry = by_language.entry(name.to_string()).or_default();
        entry.add(&LanguageCounts {
            files: 1,
            blank: stats.blank as u64,
            comment: stats.comment as u64,
            code: stats.code as u64,
        });
    }

    by_language.retain(|_, counts| counts.code > 0);
    by_language.sort_by(|a_name, a, b_name, b| b.code.cmp(&a.code).then(a_name.cmp(b_name)));

    let mut total = LanguageCounts::default();
    for counts in by_language.values() {
        total.add(counts);
    }
    by_language.insert(SUMMARY_KEY.to_string(), total);

    Ok(by_language)
}

fn read_text(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
#[path = "tokount_tests.rs"]
mod tests;
