use tracing::error;

use crate::cli::GithubArgs;
use crate::config::{Config, FileConfigLoader};
use crate::github::{GitHubClient, RepoQuery};
use crate::language::ColorSource;
use crate::logging;
use crate::output::write_json;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, Result};

use super::report::{Presentation, REPOS_FILE, STATS_FILE, prepare_output_dir};
use super::{exit_code_for, report_config_error};

#[must_use]
#[cfg(not(tarpaulin_include))]
pub fn run_github(args: &GithubArgs) -> i32 {
    let overrides = args.run.overrides(args.token.clone());
    let loaded = match FileConfigLoader::new().load(args.run.config.as_deref(), &overrides, true) {
        Ok(loaded) => loaded,
        Err(e) => return report_config_error(&args.run, &e),
    };
    logging::init(args.run.log_level(loaded.config.verbose));

    match run_github_impl(args, &loaded.config) {
        Ok(code) => code,
        Err(e) => {
            error!("Something went wrong: {e}");
            exit_code_for(&e)
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run_github_impl(args: &GithubArgs, config: &Config) -> Result<i32> {
    let run = &args.run;
    let query = RepoQuery {
        affiliation: config.affiliation.clone(),
        visibility: config.visibility,
        ignored_repos: config.ignored_repos.clone(),
    };
    let quiet = run.log_level(config.verbose).is_quiet();
    let client = GitHubClient::new(&config.token, &query)?.with_progress(!quiet);

    prepare_output_dir(run, &config.output_dir)?;
    let report = client.get_all_language_stats()?;

    if !run.stdout {
        if config.save_repos {
            write_json(
                &config.output_dir.join(REPOS_FILE),
                &report.listing.repositories,
            )?;
        }
        if config.save_json {
            write_json(&config.output_dir.join(STATS_FILE), &report.totals)?;
        }
    }

    if report.totals.is_empty() {
        error!("No language statistics found, nothing to visualize");
        return Ok(EXIT_FAILURE);
    }

    let presentation = Presentation {
        run,
        config,
        title: run.title.clone(),
        colors_required: true,
    };
    presentation.emit(&report.totals, || ColorSource::default().load())?;

    Ok(EXIT_SUCCESS)
}
