//! SVG overlay generation for edge lists.
//!
//! The view box is the full `0 0 4000 4000` drawing surface, matching the
//! coordinate space edges are validated against, so segment coordinates map
//! 1:1 into the document. An optional underlay image stands in for the map
//! raster the segments are drawn over.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;

use super::Renderer;
use crate::edge::{COORD_MAX, EdgeList};

#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    /// Image reference (path or URL) drawn underneath the segments.
    pub underlay: Option<String>,
    /// Stroke width in surface units. Zero falls back to the default.
    pub stroke_width: u32,
}

const DEFAULT_STROKE_WIDTH: u32 = 10;

/// Generate a complete SVG document for an edge list.
///
/// `EdgeList::None` yields an empty overlay: a valid document with no
/// segment elements.
pub fn generate_svg(edges: &EdgeList, options: &SvgOptions) -> String {
    let width = if options.stroke_width == 0 {
        DEFAULT_STROKE_WIDTH
    } else {
        options.stroke_width
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {COORD_MAX} {COORD_MAX}\">"
    );
    if let Some(underlay) = &options.underlay {
        let _ = writeln!(
            svg,
            "  <image href=\"{}\" x=\"0\" y=\"0\" width=\"{COORD_MAX}\" height=\"{COORD_MAX}\"/>",
            escape_attr(underlay)
        );
    }
    for edge in edges.edges() {
        let _ = writeln!(
            svg,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{width}\" stroke-linecap=\"round\"/>",
            edge.x1(),
            edge.y1(),
            edge.x2(),
            edge.y2(),
            escape_attr(edge.color())
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders edge lists as SVG documents onto a writer.
pub struct SvgRenderer<W: Write> {
    out: W,
    options: SvgOptions,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(out: W, options: SvgOptions) -> Self {
        Self { out, options }
    }
}

impl<W: Write> Renderer for SvgRenderer<W> {
    fn render(&mut self, edges: &EdgeList) -> Result<()> {
        self.out
            .write_all(generate_svg(edges, &self.options).as_bytes())?;
        Ok(())
    }
}
