//! SVG generation for a single icon size

use crate::palette::{self, Palette};

use super::IconConfig;

const BACKGROUND_GRADIENT: &str = "backgroundGradient";
const TEXT_GRADIENT: &str = "textGradient";
const INNER_SHADOW: &str = "innerShadow";

/// Chart glyph drawn in a fixed 20x20 box, translated but never scaled
const CHART_PATH: &str = "M 0 20 L 5 15 L 10 18 L 15 8 L 20 12";

/// Build the icon document incrementally
pub struct IconBuilder {
    size: u32,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl IconBuilder {
    /// Create a builder for a square canvas of `size` pixels
    pub fn new(size: u32) -> Self {
        Self {
            size,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        "  ".repeat(self.indent)
    }

    /// Add a diagonal two-stop linear gradient definition
    pub fn add_linear_gradient(&mut self, id: &str, from: &str, to: &str) {
        self.defs.push(format!(
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{from}"/>
      <stop offset="100%" stop-color="{to}"/>
    </linearGradient>"#
        ));
    }

    /// Add a soft blur-and-offset filter definition
    pub fn add_inner_shadow(&mut self, id: &str) {
        self.defs.push(format!(
            r#"<filter id="{id}">
      <feGaussianBlur in="SourceGraphic" stdDeviation="2"/>
      <feOffset dx="1" dy="1" result="offset"/>
    </filter>"#
        ));
    }

    /// Add the canvas-filling rounded background
    pub fn add_background(&mut self, fill: &str, radius: f64) {
        self.elements.push(format!(
            r#"{}<rect width="100%" height="100%" fill="{}" rx="{}" ry="{}"/>"#,
            self.indent_str(),
            fill,
            radius,
            radius
        ));
    }

    /// Add a 1px outline inset 2px from the canvas edge
    pub fn add_inset_border(&mut self, stroke: &str, radius: f64) {
        let inner = f64::from(self.size) - 4.0;
        let inner_radius = radius - 2.0;
        self.elements.push(format!(
            r#"{}<rect x="2" y="2" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1" rx="{}" ry="{}"/>"#,
            self.indent_str(),
            inner,
            inner,
            stroke,
            inner_radius,
            inner_radius
        ));
    }

    /// Add a horizontally centered label
    pub fn add_label(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_family: &str,
        font_size: f64,
        fill: &str,
    ) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="300" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            self.indent_str(),
            x,
            y,
            escape_xml(font_family),
            font_size,
            fill,
            escape_xml(text)
        ));
    }

    /// Add the line-chart glyph with its top-left corner at (x, y)
    pub fn add_chart_glyph(&mut self, x: f64, y: f64, color: &str) {
        self.start_group(&format!("translate({}, {})", x, y));
        self.elements.push(format!(
            r#"{}<path d="{}" stroke="{}" stroke-width="2" fill="none" opacity="0.8"/>"#,
            self.indent_str(),
            CHART_PATH,
            color
        ));
        self.elements.push(format!(
            r#"{}<circle cx="20" cy="12" r="2" fill="{}" opacity="0.9"/>"#,
            self.indent_str(),
            color
        ));
        self.end_group();
    }

    /// Open a transformed group
    pub fn start_group(&mut self, transform: &str) {
        self.elements.push(format!(
            r#"{}<g transform="{}">"#,
            self.indent_str(),
            transform
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let size = self.size;
        let mut svg = String::new();

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');
        svg.push_str(&format!(
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
        ));
        svg.push('\n');

        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push('\n');
            }
            svg.push_str("  </defs>\n");
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render the icon at `size` pixels with the default look
pub fn render_icon(size: u32) -> String {
    render_icon_with_config(size, &IconConfig::default(), &Palette::default())
}

/// Render the icon at `size` pixels with custom proportions and colors
///
/// Never fails: a size of 0 produces a degenerate but well-formed document.
pub fn render_icon_with_config(size: u32, config: &IconConfig, palette: &Palette) -> String {
    let font_size = config.font_size(size);
    let border_radius = config.border_radius(size);
    let s = f64::from(size);

    // Palette values come from user files and land inside attributes
    let color = |token: &str| escape_xml(&palette.resolve_or_default(token));

    let mut builder = IconBuilder::new(size);

    builder.add_linear_gradient(
        BACKGROUND_GRADIENT,
        &color(palette::BACKGROUND_START),
        &color(palette::BACKGROUND_END),
    );
    builder.add_linear_gradient(
        TEXT_GRADIENT,
        &color(palette::TEXT_START),
        &color(palette::TEXT_END),
    );
    builder.add_inner_shadow(INNER_SHADOW);

    builder.add_background(&format!("url(#{BACKGROUND_GRADIENT})"), border_radius);
    builder.add_inset_border(&color(palette::BORDER), border_radius);

    // Nudge down so the lowercase x-height sits on the optical center
    builder.add_label(
        &config.label,
        s / 2.0,
        s / 2.0 + font_size * config.baseline_ratio,
        &config.font_family,
        font_size,
        &format!("url(#{TEXT_GRADIENT})"),
    );

    let (gx, gy) = config.glyph_offset;
    builder.add_chart_glyph(s * gx, s * gy, &color(palette::ACCENT));

    builder.build()
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
