//! Color palette for the icon template
//!
//! The template refers to its colors by token name. A palette maps those
//! tokens to concrete SVG paint values, so the icon can be recolored from a
//! TOML file without touching the template.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a palette
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A palette mapping color tokens to paint values
#[derive(Debug, Clone)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> paint value
    pub colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Token for the first stop of the background gradient
pub const BACKGROUND_START: &str = "background-start";
/// Token for the last stop of the background gradient
pub const BACKGROUND_END: &str = "background-end";
/// Token for the first stop of the label gradient
pub const TEXT_START: &str = "text-start";
/// Token for the last stop of the label gradient
pub const TEXT_END: &str = "text-end";
/// Token for the inset border stroke
pub const BORDER: &str = "border";
/// Token for the chart glyph
pub const ACCENT: &str = "accent";

/// Dark background, near-white label, green chart accent
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "trackr"
description = "Dark iOS-style icon with a green chart accent"

[colors]
background-start = "#1a1a1a"
background-end = "#2a2a2a"
text-start = "#ffffff"
text-end = "#f0f0f0"
border = "rgba(255,255,255,0.1)"
accent = "#4CAF50"
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette from TOML string
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a color token to a paint value
    ///
    /// Returns None if the token is not defined in this palette.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token, falling back to the default palette
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        Self::default()
            .resolve(token)
            .map(str::to_string)
            .unwrap_or_else(|| "#000000".to_string())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
