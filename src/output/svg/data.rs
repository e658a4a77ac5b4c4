//! Chart data model.

use super::style::ChartColor;

/// One labeled magnitude with its color.
#[derive(Debug, Clone)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
