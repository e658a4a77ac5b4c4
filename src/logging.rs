//! Process-wide diagnostic output via `tracing`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Verbosity for one run, decided once from flags and config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only, message text without decoration.
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl LogLevel {
    /// `quiet` wins over `verbose`.
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::INFO,
            Self::Verbose => LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence when set.
///
/// Later calls are no-ops, so tests and repeated invocations are safe.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time();

    let _ = if level.is_quiet() {
        builder.with_level(false).with_target(false).try_init()
    } else {
        builder.with_target(level == LogLevel::Verbose).try_init()
    };
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
