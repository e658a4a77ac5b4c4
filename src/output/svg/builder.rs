//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;
use super::style::ChartColor;

const FONT_FAMILY: &str = "-apple-system, 'Segoe UI', Helvetica, Arial, sans-serif";

/// Assembles elements into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    background: Option<ChartColor>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Accessible title; not drawn.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: ChartColor) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}" role="img">"#,
            w = self.width,
            h = self.height
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, "    <title>{escaped}</title>");
        }

        if let Some(background) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="100%" height="100%" fill="{}"/>"#,
                background.to_css()
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
