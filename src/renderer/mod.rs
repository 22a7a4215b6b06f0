//! SVG renderer for the app icon
//!
//! This module turns a pixel size into a complete, standalone SVG
//! document. Every proportion is derived linearly from the size.

pub mod config;
pub mod svg;

pub use config::IconConfig;
pub use svg::{render_icon, render_icon_with_config};
