//! Final step shared by `github` and `local`: print, save or chart the totals.

use std::path::Path;

use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::language::{ColorTable, LanguageTotals};
use crate::output::{
    ChartOptions, ChartPaths, render_bar, render_pie, to_pretty_json, write_chart, write_json,
};

pub const STATS_FILE: &str = "language_stats.json";
pub const REPOS_FILE: &str = "repositories.json";
pub const COLORS_FILE: &str = "github_colors.json";

/// How the command wants its totals presented.
pub struct Presentation<'a> {
    pub run: &'a RunArgs,
    pub config: &'a Config,
    /// Title for both charts; `None` uses the per-chart defaults.
    pub title: Option<String>,
    /// Whether a color table failure aborts the run.
    pub colors_required: bool,
}

impl Presentation<'_> {
    /// Emit `stats` per `--stdout`/`--json-only`, or render both charts.
    ///
    /// # Errors
    /// Returns an error if a file cannot be written, or if colors are
    /// required and could not be loaded.
    pub fn emit(
        &self,
        stats: &LanguageTotals,
        load_colors: impl FnOnce() -> Result<ColorTable>,
    ) -> Result<()> {
        if self.run.stdout {
            print!("{}", to_pretty_json(stats)?);
            return Ok(());
        }

        if self.run.json_only {
            let path = self.config.output_dir.join(STATS_FILE);
            write_json(&path, stats)?;
            info!("Saved stats to {}", path.display());
            return Ok(());
        }

        let colors = self.colors(load_colors)?;
        self.render(stats, &colors)
    }

    fn colors(&self, load: impl FnOnce() -> Result<ColorTable>) -> Result<ColorTable> {
        let colors = match load() {
            Ok(colors) => colors,
            Err(e) if self.colors_required => return Err(e),
            Err(e) => {
                warn!("Couldn't load GitHub colors, charts will be gray: {e}");
                return Ok(ColorTable::new());
            }
        };

        if self.config.save_json {
            write_json(&self.config.output_dir.join(COLORS_FILE), &colors)?;
        }
        Ok(colors)
    }

    fn render(&self, stats: &LanguageTotals, colors: &ColorTable) -> Result<()> {
        let options = ChartOptions::for_theme(self.config.theme);
        let paths = ChartPaths::resolve(&self.config.output_dir, self.run.output.as_deref());
        let title = self.title.as_deref();
        let top_n = self.config.top_n_languages;

        write_chart(&paths.pie, &render_pie(stats, colors, title, &options))?;
        write_chart(&paths.bar, &render_bar(stats, colors, top_n, title, &options))?;
        Ok(())
    }
}

/// Ensure the output directory exists unless nothing will be written.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn prepare_output_dir(run: &RunArgs, dir: &Path) -> Result<()> {
    if run.stdout {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    info!("Saving to {}", dir.display());
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
