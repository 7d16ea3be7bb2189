//! Low-level SVG string assembly.
//!
//! Pure string building over `std::fmt::Write`; no I/O happens here. The
//! view renderers compose documents from these primitives.

use std::fmt::Write;

use crate::math::Point2;

/// Escape the five XML special characters for element text content.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Formats a point list as a `points` attribute value.
fn points_attr(points: &[Point2]) -> String {
    let mut attr = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", p.x, p.y);
    }
    attr
}

/// Accumulates one SVG document.
#[derive(Debug)]
pub struct SvgDocument {
    out: String,
}

impl SvgDocument {
    /// Starts a document with the XML declaration and opening `<svg>` tag.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        );
        let _ = writeln!(
            out,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
        );
        Self { out }
    }

    /// Emits `<title>` and `<desc>` elements.
    pub fn metadata(&mut self, title: &str, desc: &str) {
        let _ = writeln!(self.out, "<title>{}</title>", xml_escape(title));
        let _ = writeln!(self.out, "<desc>{}</desc>", xml_escape(desc));
    }

    /// Fills the whole canvas with a background color.
    pub fn background(&mut self, fill: &str) {
        let _ = writeln!(
            self.out,
            r#"<rect width="100%" height="100%" fill="{fill}"/>"#
        );
    }

    /// Opens a `<g>` element carrying the given raw attribute text.
    pub fn open_group(&mut self, attributes: &str) {
        let _ = writeln!(self.out, "<g {attributes}>");
    }

    /// Closes the innermost `<g>` element.
    pub fn close_group(&mut self) {
        let _ = writeln!(self.out, "</g>");
    }

    /// Emits a filled polygon without stroke.
    pub fn filled_polygon(&mut self, points: &[Point2], fill: &str) {
        let _ = writeln!(
            self.out,
            r#"  <polygon points="{}" fill="{fill}" stroke="none" />"#,
            points_attr(points)
        );
    }

    /// Emits a stroked polygon; pass `"none"` as `fill` for outline only.
    pub fn stroked_polygon(
        &mut self,
        points: &[Point2],
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) {
        let _ = writeln!(
            self.out,
            r#"  <polygon points="{}" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" />"#,
            points_attr(points)
        );
    }

    /// Emits a line segment; stroke styling comes from the enclosing group.
    pub fn line(&mut self, a: Point2, b: Point2) {
        let _ = writeln!(
            self.out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            a.x, a.y, b.x, b.y
        );
    }

    /// Emits a circle.
    pub fn circle(&mut self, center: Point2, radius: f64, fill: &str, stroke: &str) {
        let _ = writeln!(
            self.out,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{fill}" stroke="{stroke}" stroke-width="1" />"#,
            center.x, center.y
        );
    }

    /// Closes the document and returns the SVG text.
    #[must_use]
    pub fn finish(mut self) -> String {
        let _ = writeln!(self.out, "</svg>");
        self.out
    }
}
