use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{CliOverrides, Theme};
use crate::logging::LogLevel;

#[derive(Parser, Debug)]
#[command(name = "ghlang")]
#[command(author, version, about = "See what languages you've been coding in")]
#[command(long_about = "Aggregate language usage from your GitHub repositories or local \
    directories and render it as pie and bar charts.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Runtime failure or nothing to chart\n  \
    2 - Configuration error")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Language stats across your GitHub repositories
    Github(GithubArgs),

    /// Language stats for local directories
    Local(LocalArgs),

    /// Show the configuration file location or its effective values
    Config(ConfigArgs),
}

/// Flags shared by the `github` and `local` commands.
#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunArgs {
    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for charts and JSON files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Chart base name; produces <NAME>_pie.svg and <NAME>_bar.svg
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Title for both charts
    #[arg(short, long)]
    pub title: Option<String>,

    /// Languages shown in the bar chart before grouping the rest as "Other"
    #[arg(long)]
    pub top_n: Option<usize>,

    /// Save raw JSON data alongside the charts
    #[arg(long)]
    pub save_json: bool,

    /// Write language_stats.json and skip the charts
    #[arg(long)]
    pub json_only: bool,

    /// Print the stats as JSON to stdout and write no files
    #[arg(long)]
    pub stdout: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Chart color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,
}

impl RunArgs {
    /// Flags as config overrides; unset flags leave the file value alone.
    #[must_use]
    pub fn overrides(&self, token: Option<String>) -> CliOverrides {
        CliOverrides {
            token,
            output_dir: self.output_dir.clone(),
            top_n_languages: self.top_n,
            save_json: self.save_json.then_some(true),
            verbose: self.verbose.then_some(true),
            theme: self.theme,
        }
    }

    /// `--stdout` implies quiet; otherwise flags, then the config's `verbose`.
    #[must_use]
    pub const fn log_level(&self, config_verbose: bool) -> LogLevel {
        LogLevel::from_flags(self.quiet || self.stdout, self.verbose || config_verbose)
    }
}

#[derive(Args, Debug)]
pub struct GithubArgs {
    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Debug)]
pub struct LocalArgs {
    /// Files or directories to analyze
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Follow symbolic links while counting (unix only)
    #[arg(long)]
    pub follow_links: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the configuration file path
    #[arg(long, conflicts_with = "show")]
    pub path: bool,

    /// Print the effective configuration as JSON (token hidden)
    #[arg(long)]
    pub show: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
