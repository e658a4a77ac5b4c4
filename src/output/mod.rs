//! Charts, JSON artifacts and terminal progress.

mod artifacts;
mod charts;
mod progress;
pub mod svg;

pub use artifacts::{to_pretty_json, write_json};
pub use charts::{
    BarLayout, ChartOptions, ChartPaths, DEFAULT_PIE_TITLE, OTHER_LABEL, PieLayout, Slice,
    default_bar_title, render_bar, render_pie, write_chart,
};
pub use progress::FetchProgress;
