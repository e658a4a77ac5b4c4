use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::LanguageTotals;

/// Reserved key holding the helper's grand total.
pub const SUMMARY_KEY: &str = "SUM";

/// Metadata key emitted by cloc-compatible tools.
const HEADER_KEY: &str = "header";

/// Per-language counters reported by the line-counting helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCounts {
    #[serde(rename = "nFiles", alias = "files", default)]
    pub files: u64,
    #[serde(default)]
    pub blank: u64,
    #[serde(default)]
    pub comment: u64,
    #[serde(default)]
    pub code: u64,
}

impl LanguageCounts {
    pub const fn add(&mut self, other: &Self) {
        self.files += other.files;
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}

/// Language name to counters, including the `SUM` entry when present.
pub type DetailedStats = IndexMap<String, LanguageCounts>;

/// Parse the helper's stdout, skipping the cloc `header` block.
///
/// # Errors
/// Returns an error if the output is not a JSON object of counter records.
pub fn parse_helper_output(json: &str) -> Result<DetailedStats> {
    let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut stats = DetailedStats::with_capacity(raw.len());
    for (name, value) in raw {
        if name == HEADER_KEY {
            continue;
        }
        stats.insert(name, serde_json::from_value(value)?);
    }
    Ok(stats)
}

/// Sum per-language counters across several results.
///
/// The `SUM` entry of each input is skipped; the result has none.
#[must_use]
pub fn merge(results: &[DetailedStats]) -> DetailedStats {
    let mut merged = DetailedStats::new();
    for stats in results {
        for (lang, counts) in stats {
            if lang == SUMMARY_KEY {
                continue;
            }
            merged.entry(lang.clone()).or_default().add(counts);
        }
    }
    merged
}

/// Code line counts for languages with any code, excluding `SUM`.
#[must_use]
pub fn extract_code_lines(stats: &DetailedStats) -> LanguageTotals {
    stats
        .iter()
        .filter(|(lang, counts)| lang.as_str() != SUMMARY_KEY && counts.code > 0)
        .map(|(lang, counts)| (lang.clone(), counts.code))
        .collect()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
