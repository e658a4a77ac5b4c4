//! Primitive SVG elements: rectangles, pie wedges, and text.

use std::f64::consts::TAU;
use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A filled rectangle with a hover tooltip; used for bar segments and
/// legend swatches.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub stroke: Option<ChartColor>,
    pub tooltip: String,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: ChartColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            stroke: None,
            tooltip: String::new(),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: ChartColor) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height),
            self.color.to_css()
        );
        if let Some(stroke) = &self.stroke {
            let _ = write!(output, r#" stroke="{}" stroke-width="1""#, stroke.to_css());
        }
        close_with_tooltip(output, "rect", &self.tooltip)
    }
}

/// A pie wedge between two angles, measured clockwise from 12 o'clock as
/// fractions of a full turn.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub color: ChartColor,
    pub stroke: Option<ChartColor>,
    pub tooltip: String,
}

impl Wedge {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, start: f64, end: f64, color: ChartColor) -> Self {
        Self {
            cx,
            cy,
            radius,
            start,
            end,
            color,
            stroke: None,
            tooltip: String::new(),
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: ChartColor) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Point on the circle at `turn` (0.0 = top, clockwise), scaled by `scale`.
    #[must_use]
    pub fn point_at(&self, turn: f64, scale: f64) -> (f64, f64) {
        let angle = turn.mul_add(TAU, -TAU / 4.0);
        let r = self.radius * scale;
        (r.mul_add(angle.cos(), self.cx), r.mul_add(angle.sin(), self.cy))
    }

    fn is_full_circle(&self) -> bool {
        self.end - self.start >= 1.0 - 1e-9
    }
}

impl SvgElement for Wedge {
    fn render(&self) -> String {
        let fill = self.color.to_css();
        let mut output = if self.is_full_circle() {
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}""#,
                coord(self.cx),
                coord(self.cy),
                coord(self.radius)
            )
        } else {
            let (x0, y0) = self.point_at(self.start, 1.0);
            let (x1, y1) = self.point_at(self.end, 1.0);
            let large_arc = u8::from(self.end - self.start > 0.5);
            format!(
                r#"<path d="M{},{} L{},{} A{r},{r} 0 {large_arc} 1 {},{} Z" fill="{fill}""#,
                coord(self.cx),
                coord(self.cy),
                coord(x0),
                coord(y0),
                coord(x1),
                coord(y1),
                r = coord(self.radius),
            )
        };
        if let Some(stroke) = &self.stroke {
            let _ = write!(output, r#" stroke="{}" stroke-width="1""#, stroke.to_css());
        }
        let tag = if self.is_full_circle() { "circle" } else { "path" };
        close_with_tooltip(output, tag, &self.tooltip)
    }
}

/// A text label.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub color: ChartColor,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub bold: bool,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>, color: ChartColor) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            color,
            anchor: TextAnchor::Start,
            font_size: 12.0,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let weight = if self.bold { r#" font-weight="bold""# } else { "" };
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{weight}>{}</text>"#,
            coord(self.x),
            coord(self.y),
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.content)
        )
    }
}

fn close_with_tooltip(mut output: String, tag: &str, tooltip: &str) -> String {
    if tooltip.is_empty() {
        output.push_str("/>");
    } else {
        let _ = write!(
            output,
            ">\n    <title>{}</title>\n</{tag}>",
            html_escape(tooltip)
        );
    }
    output
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
