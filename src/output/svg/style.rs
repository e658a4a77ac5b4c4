//! SVG styling primitives: colors, text anchoring and chart themes.

use std::fmt;

/// Fill or stroke color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Hex color such as `#dea584`
    Hex(String),
    /// SVG keyword such as `white` or `none`
    Named(&'static str),
}

impl ChartColor {
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self::Named(name)
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::Named(n) => (*n).to_string(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Background and text colors for a rendered chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: ChartColor,
    pub text: ChartColor,
    /// Color of labels drawn on top of colored segments.
    pub label: ChartColor,
    /// Outline separating adjacent wedges and segments.
    pub edge: ChartColor,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: ChartColor::named("white"),
            text: ChartColor::hex("#24292f"),
            label: ChartColor::named("white"),
            edge: ChartColor::named("white"),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: ChartColor::hex("#0d1117"),
            text: ChartColor::hex("#e6edf3"),
            label: ChartColor::named("white"),
            edge: ChartColor::hex("#0d1117"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
