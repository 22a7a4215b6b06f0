//! Configuration for icon rendering

/// Proportions and text used by the icon template
///
/// All ratios are fractions of the icon's edge length.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Text drawn in the middle of the icon
    pub label: String,

    /// Font size as a fraction of the icon size
    pub font_ratio: f64,

    /// Corner radius as a fraction of the icon size
    pub radius_ratio: f64,

    /// Downward shift of the label, as a fraction of the font size
    pub baseline_ratio: f64,

    /// Top-left corner of the chart glyph, as fractions of the icon size
    pub glyph_offset: (f64, f64),

    /// CSS font stack for the label
    pub font_family: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            label: "trackr".to_string(),
            font_ratio: 0.18,
            radius_ratio: 0.15,
            baseline_ratio: 0.3,
            glyph_offset: (0.7, 0.2),
            font_family: "SF Pro Display, -apple-system, BlinkMacSystemFont, Helvetica, Arial, sans-serif"
                .to_string(),
        }
    }
}

impl IconConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label text
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the font size ratio
    pub fn with_font_ratio(mut self, ratio: f64) -> Self {
        self.font_ratio = ratio;
        self
    }

    /// Set the corner radius ratio
    pub fn with_radius_ratio(mut self, ratio: f64) -> Self {
        self.radius_ratio = ratio;
        self
    }

    /// Set the label's downward shift, as a fraction of the font size
    pub fn with_baseline_ratio(mut self, ratio: f64) -> Self {
        self.baseline_ratio = ratio;
        self
    }

    /// Set the chart glyph position, as fractions of the icon size
    pub fn with_glyph_offset(mut self, x: f64, y: f64) -> Self {
        self.glyph_offset = (x, y);
        self
    }

    /// Set the font stack
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn font_size(&self, size: u32) -> f64 {
        f64::from(size) * self.font_ratio
    }

    pub fn border_radius(&self, size: u32) -> f64 {
        f64::from(size) * self.radius_ratio
    }
}
