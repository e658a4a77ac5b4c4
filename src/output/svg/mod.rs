//! SVG building blocks for the language charts.

mod builder;
mod data;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use data::DataPoint;
pub use element::{Rect, SvgElement, Text, Wedge};
pub use format::{format_percent, html_escape};
pub use style::{ChartColor, Palette, TextAnchor};
