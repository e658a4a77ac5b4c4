//! Pie and segmented bar charts of language totals, rendered as SVG.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::svg::{
    ChartColor, DataPoint, Palette, Rect, SvgBuilder, Text, TextAnchor, Wedge, format_percent,
};
use crate::config::Theme;
use crate::error::Result;
use crate::language::{ColorTable, LanguageTotals, color_for};

pub const DEFAULT_PIE_TITLE: &str = "Language Distribution";
pub const OTHER_LABEL: &str = "Other";

const PIE_FILE: &str = "language_pie.svg";
const BAR_FILE: &str = "language_bar.svg";
const CHART_EXTENSION: &str = "svg";

const PIE_WIDTH: f64 = 900.0;
const PIE_MIN_HEIGHT: f64 = 620.0;
const PIE_RADIUS: f64 = 230.0;
const PIE_LABEL_DISTANCE: f64 = 0.85;

const BAR_WIDTH: f64 = 900.0;
const BAR_MARGIN: f64 = 40.0;
const BAR_TOP: f64 = 80.0;
const BAR_HEIGHT: f64 = 56.0;

const LEGEND_ROW: f64 = 22.0;
const LEGEND_SWATCH: f64 = 14.0;

/// Default bar chart title for a given `top_n`.
#[must_use]
pub fn default_bar_title(top_n: usize) -> String {
    format!("Top {top_n} Languages")
}

/// Rendering knobs shared by both charts.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Smallest wedge percentage (0-100) that gets an on-chart label.
    pub min_pie_label_pct: f64,
    /// Smallest bar segment width fraction (0-1) that gets an on-chart label.
    pub min_bar_label_width: f64,
    pub palette: Palette,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            min_pie_label_pct: 1.5,
            min_bar_label_width: 0.05,
            palette: Palette::light(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        let palette = match theme {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        };
        Self {
            palette,
            ..Self::default()
        }
    }
}

/// One language's share of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
    pub fraction: f64,
}

/// Sorted pie wedges with their fractions of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    pub slices: Vec<Slice>,
}

impl PieLayout {
    /// Descending by magnitude; a zero total is treated as 1.
    #[must_use]
    pub fn from_stats(stats: &LanguageTotals) -> Self {
        let items = sorted_desc(stats);
        let total = total_of(stats);
        let slices = items
            .into_iter()
            .map(|(label, value)| Slice {
                label: label.to_string(),
                value,
                fraction: as_f64(value) / as_f64(total),
            })
            .collect();
        Self { slices }
    }
}

/// Segments of the stacked bar: the top `n` languages plus `Other`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub segments: Vec<Slice>,
}

impl BarLayout {
    /// `Other` holds whatever the top `n` leave of the total and is only
    /// present when positive.
    #[must_use]
    pub fn from_stats(stats: &LanguageTotals, top_n: usize) -> Self {
        let items = sorted_desc(stats);
        let total = total_of(stats);

        let mut segments: Vec<(String, u64)> = items
            .into_iter()
            .take(top_n)
            .map(|(label, value)| (label.to_string(), value))
            .collect();
        let shown: u64 = segments.iter().map(|(_, v)| v).sum();
        let other = total.saturating_sub(shown);
        if other > 0 {
            segments.push((OTHER_LABEL.to_string(), other));
        }

        let segments = segments
            .into_iter()
            .map(|(label, value)| Slice {
                label,
                value,
                fraction: as_f64(value) / as_f64(total),
            })
            .collect();
        Self { segments }
    }

    /// Sum of the segment fractions; 1.0 for any non-empty input.
    #[must_use]
    pub fn total_fraction(&self) -> f64 {
        self.segments.iter().map(|s| s.fraction).sum()
    }
}

/// Render the pie chart with a legend listing every language.
#[must_use]
pub fn render_pie(
    stats: &LanguageTotals,
    colors: &ColorTable,
    title: Option<&str>,
    options: &ChartOptions,
) -> String {
    let layout = PieLayout::from_stats(stats);
    debug!("Rendering pie chart with {} languages", layout.slices.len());

    let points = to_points(&layout.slices, colors);
    let palette = &options.palette;
    let title = title.unwrap_or(DEFAULT_PIE_TITLE);

    let legend_top = 90.0;
    let height = legend_height(points.len()).max(PIE_MIN_HEIGHT - legend_top) + legend_top;
    let (cx, cy) = (PIE_RADIUS + 60.0, height.mul_add(0.5, 20.0));

    let mut svg = SvgBuilder::new(PIE_WIDTH, height)
        .with_title(title)
        .with_background(palette.background.clone())
        .push_element(&heading(PIE_WIDTH / 2.0, title, palette));

    let mut start = 0.0;
    for (slice, point) in layout.slices.iter().zip(&points) {
        let end = start + slice.fraction;
        let wedge = Wedge::new(cx, cy, PIE_RADIUS, start, end, point.color.clone())
            .with_stroke(palette.edge.clone())
            .with_tooltip(legend_label(slice));
        svg = svg.push_element(&wedge);

        if slice.fraction * 100.0 >= options.min_pie_label_pct {
            let (lx, ly) = wedge.point_at((start + end) / 2.0, PIE_LABEL_DISTANCE);
            svg = svg.push_element(&segment_label(lx, ly + 4.0, slice.fraction, palette));
        }
        start = end;
    }

    let legend_x = cx + PIE_RADIUS + 60.0;
    push_legend(svg, &layout.slices, &points, legend_x, legend_top, palette).build()
}

/// Render the stacked bar chart of the top `top_n` languages plus `Other`.
#[must_use]
pub fn render_bar(
    stats: &LanguageTotals,
    colors: &ColorTable,
    top_n: usize,
    title: Option<&str>,
    options: &ChartOptions,
) -> String {
    let layout = BarLayout::from_stats(stats, top_n);
    debug!("Rendering bar chart (top {top_n} languages)");

    let points = to_points(&layout.segments, colors);
    let palette = &options.palette;
    let title = title.map_or_else(|| default_bar_title(top_n), str::to_string);

    let legend_top = BAR_TOP + BAR_HEIGHT + 44.0;
    let height = legend_top + legend_height(points.len());
    let track = BAR_MARGIN.mul_add(-2.0, BAR_WIDTH);

    let mut svg = SvgBuilder::new(BAR_WIDTH, height)
        .with_title(title.as_str())
        .with_background(palette.background.clone())
        .push_element(&heading(BAR_WIDTH / 2.0, &title, palette));

    let mut left = BAR_MARGIN;
    for (segment, point) in layout.segments.iter().zip(&points) {
        let width = segment.fraction * track;
        let rect = Rect::new(left, BAR_TOP, width, BAR_HEIGHT, point.color.clone())
            .with_stroke(palette.edge.clone())
            .with_tooltip(legend_label(segment));
        svg = svg.push_element(&rect);

        if segment.fraction >= options.min_bar_label_width {
            let y = BAR_TOP + BAR_HEIGHT / 2.0 + 5.0;
            svg = svg.push_element(&segment_label(left + width / 2.0, y, segment.fraction, palette));
        }
        left += width;
    }

    push_legend(svg, &layout.segments, &points, BAR_MARGIN, legend_top, palette).build()
}

/// Write a rendered chart, creating parent directories and replacing any
/// existing file.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn write_chart(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;
    info!("Saved chart to {}", path.display());
    Ok(())
}

/// Where the pie and bar charts of one run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPaths {
    pub pie: PathBuf,
    pub bar: PathBuf,
}

impl ChartPaths {
    /// `language_pie.svg`/`language_bar.svg` in `output_dir`, or
    /// `<stem>_pie.svg`/`<stem>_bar.svg` next to `output`. A relative
    /// `output` is resolved against `output_dir`.
    #[must_use]
    pub fn resolve(output_dir: &Path, output: Option<&Path>) -> Self {
        let Some(output) = output else {
            return Self {
                pie: output_dir.join(PIE_FILE),
                bar: output_dir.join(BAR_FILE),
            };
        };

        let parent = match output.parent() {
            Some(p) if output.is_absolute() => p.to_path_buf(),
            Some(p) if !p.as_os_str().is_empty() => output_dir.join(p),
            _ => output_dir.to_path_buf(),
        };
        let stem = output
            .file_stem()
            .map_or_else(|| "language".into(), |s| s.to_string_lossy());

        Self {
            pie: parent.join(format!("{stem}_pie.{CHART_EXTENSION}")),
            bar: parent.join(format!("{stem}_bar.{CHART_EXTENSION}")),
        }
    }
}

fn sorted_desc(stats: &LanguageTotals) -> Vec<(&str, u64)> {
    let mut items: Vec<(&str, u64)> = stats.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    items.sort_by_key(|&(_, v)| Reverse(v));
    items
}

fn total_of(stats: &LanguageTotals) -> u64 {
    match stats.values().sum::<u64>() {
        0 => 1,
        total => total,
    }
}

#[allow(clippy::cast_precision_loss)]
const fn as_f64(value: u64) -> f64 {
    value as f64
}

fn to_points(slices: &[Slice], colors: &ColorTable) -> Vec<DataPoint> {
    slices
        .iter()
        .map(|s| {
            DataPoint::new(
                s.label.as_str(),
                s.fraction,
                ChartColor::hex(color_for(colors, &s.label)),
            )
        })
        .collect()
}

fn legend_label(slice: &Slice) -> String {
    format!("{} ({})", slice.label, format_percent(slice.fraction))
}

#[allow(clippy::cast_precision_loss)]
fn legend_height(rows: usize) -> f64 {
    (rows as f64).mul_add(LEGEND_ROW, 30.0)
}

fn heading(x: f64, title: &str, palette: &Palette) -> Text {
    Text::new(x, 44.0, title, palette.text.clone())
        .with_anchor(TextAnchor::Middle)
        .with_font_size(22.0)
        .bold()
}

fn segment_label(x: f64, y: f64, fraction: f64, palette: &Palette) -> Text {
    Text::new(x, y, format_percent(fraction), palette.label.clone())
        .with_anchor(TextAnchor::Middle)
        .with_font_size(12.0)
        .bold()
}

fn push_legend(
    mut svg: SvgBuilder,
    slices: &[Slice],
    points: &[DataPoint],
    x: f64,
    top: f64,
    palette: &Palette,
) -> SvgBuilder {
    svg = svg.push_element(
        &Text::new(x, top, "Languages", palette.text.clone())
            .with_font_size(14.0)
            .bold(),
    );

    let mut y = top + LEGEND_ROW;
    for (slice, point) in slices.iter().zip(points) {
        let swatch = Rect::new(x, y - 11.0, LEGEND_SWATCH, LEGEND_SWATCH, point.color.clone());
        let label = Text::new(x + LEGEND_SWATCH + 8.0, y, legend_label(slice), palette.text.clone());
        svg = svg.push_element(&swatch).push_element(&label);
        y += LEGEND_ROW;
    }
    svg
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
