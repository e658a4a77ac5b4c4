//! Local-path language aggregation through the `tokount` helper.

mod client;
mod stats;

pub use client::{HELPER_NAME, LocalClient, artifact_file_name};
pub use stats::{
    DetailedStats, LanguageCounts, SUMMARY_KEY, extract_code_lines, merge, parse_helper_output,
};
