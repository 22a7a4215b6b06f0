//! Trackr icons - app icon assets for iOS, Android and the web
//!
//! This library renders the Trackr app icon as SVG at any pixel size and
//! assembles a static HTML page embedding each required size, ready to be
//! saved from a browser.
//!
//! # Example
//!
//! ```rust
//! use trackr_icons::{assemble, render_icon, APP_ICONS};
//!
//! let svg = render_icon(180);
//! assert!(svg.contains(r#"viewBox="0 0 180 180""#));
//!
//! let html = assemble(APP_ICONS);
//! assert!(html.contains("data:image/svg+xml;base64,"));
//! ```

pub mod error;
pub mod icon;
pub mod output;
pub mod page;
pub mod palette;
pub mod renderer;

use std::path::PathBuf;

pub use error::{GenerateError, PayloadError};
pub use icon::{IconSpec, RenderedIcon, APP_ICONS, STANDALONE_SIZES};
pub use output::{generate, GenerationReport, ASSETS_DIR, HTML_FILENAME};
pub use page::{assemble, assemble_with_config, decode_payloads, render_all};
pub use palette::{Palette, PaletteError};
pub use renderer::{render_icon, render_icon_with_config, IconConfig};

/// Configuration for a complete generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the page and the `assets/` folder
    pub output_dir: PathBuf,
    /// Icons embedded in the export page
    pub specs: Vec<IconSpec>,
    /// Template proportions and label
    pub icon: IconConfig,
    /// Template colors
    pub palette: Palette,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            specs: APP_ICONS.to_vec(),
            icon: IconConfig::default(),
            palette: Palette::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the icons embedded in the page
    pub fn with_specs(mut self, specs: Vec<IconSpec>) -> Self {
        self.specs = specs;
        self
    }

    /// Set the icon template configuration
    pub fn with_icon(mut self, icon: IconConfig) -> Self {
        self.icon = icon;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_config() {
        let config = GeneratorConfig::new();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.specs, APP_ICONS);
        assert_eq!(config.icon, IconConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeneratorConfig::new()
            .with_output_dir("build")
            .with_specs(vec![IconSpec::new(16, "tiny.png", "Tab icon")])
            .with_icon(IconConfig::new().with_label("beta"));

        assert_eq!(config.output_dir, PathBuf::from("build"));
        assert_eq!(config.specs.len(), 1);
        assert_eq!(config.icon.label, "beta");
    }
}
