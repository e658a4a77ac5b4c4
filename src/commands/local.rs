use std::path::PathBuf;

use tracing::{debug, error, warn};

use crate::cli::LocalArgs;
use crate::config::{Config, FileConfigLoader};
use crate::language::{ColorSource, normalize_stats};
use crate::local::{DetailedStats, LocalClient, artifact_file_name, extract_code_lines, merge};
use crate::logging;
use crate::output::write_json;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

use super::report::{Presentation, prepare_output_dir};
use super::{exit_code_for, report_config_error};

#[must_use]
pub fn run_local(args: &LocalArgs) -> i32 {
    let overrides = args.run.overrides(None);
    let loaded = match FileConfigLoader::new().load(args.run.config.as_deref(), &overrides, false) {
        Ok(loaded) => loaded,
        Err(e) => return report_config_error(&args.run, &e),
    };
    logging::init(args.run.log_level(loaded.config.verbose));

    match run_local_impl(args, &loaded.config) {
        Ok(code) => code,
        Err(e) => {
            error!("Something went wrong: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_local_impl(args: &LocalArgs, config: &Config) -> Result<i32> {
    let run = &args.run;
    let mut client =
        LocalClient::new(config.ignored_dirs.clone()).with_follow_links(follow_links(args));
    if let Some(binary) = &config.tokount_binary {
        client = client.with_helper(binary);
    }
    debug!("Using helper {}", client.helper().display());

    prepare_output_dir(run, &config.output_dir)?;

    let results = client.run_on_paths(&args.paths)?;
    if config.save_json && !run.stdout {
        save_raw_counts(config, &args.paths, &results)?;
    }

    let merged = merge(&results);
    let stats = normalize_stats(&extract_code_lines(&merged));
    if stats.is_empty() {
        error!("No code found to analyze, nothing to visualize");
        return Ok(EXIT_FAILURE);
    }

    let presentation = Presentation {
        run,
        config,
        title: Some(chart_title(&args.paths, run.title.as_deref())),
        colors_required: false,
    };
    presentation.emit(&stats, || ColorSource::default().load())?;

    Ok(EXIT_SUCCESS)
}

fn follow_links(args: &LocalArgs) -> bool {
    if args.follow_links && cfg!(windows) {
        warn!("--follow-links is not supported on Windows, ignoring");
        return false;
    }
    args.follow_links
}

fn save_raw_counts(config: &Config, paths: &[PathBuf], results: &[DetailedStats]) -> Result<()> {
    for (index, (path, stats)) in paths.iter().zip(results).enumerate() {
        let name = artifact_file_name(index, paths.len(), path);
        write_json(&config.output_dir.join(name), stats)?;
    }
    Ok(())
}

/// `Local: <dir name>` for one path, `Local: N paths` otherwise.
fn chart_title(paths: &[PathBuf], custom: Option<&str>) -> String {
    if let Some(title) = custom {
        return title.to_string();
    }
    if let [only] = paths {
        let name = dunce::canonicalize(only)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| only.display().to_string());
        return format!("Local: {name}");
    }
    format!("Local: {} paths", paths.len())
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
