pub mod config;
pub mod github;
pub mod local;
pub mod report;

pub use config::run_config;
pub use github::run_github;
pub use local::run_local;

use tracing::error;

use crate::cli::RunArgs;
use crate::error::GhlangError;
use crate::logging;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE};

/// Configuration failed before the run's verbosity is known; log with the
/// flags alone and exit with the configuration code.
fn report_config_error(run: &RunArgs, e: &GhlangError) -> i32 {
    logging::init(run.log_level(false));
    error!("{e}");
    EXIT_CONFIG_ERROR
}

const fn exit_code_for(e: &GhlangError) -> i32 {
    if e.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}
