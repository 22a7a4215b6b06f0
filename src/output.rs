//! Writing the export page and standalone SVG files to disk

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::icon::STANDALONE_SIZES;
use crate::page::assemble_with_config;
use crate::renderer::render_icon_with_config;
use crate::GeneratorConfig;

/// Name of the export page inside the output directory
pub const HTML_FILENAME: &str = "trackr_app_icons.html";

/// Subdirectory holding the standalone SVG files
pub const ASSETS_DIR: &str = "assets";

/// Path of the standalone SVG for `size` under `output_dir`
pub fn svg_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir
        .join(ASSETS_DIR)
        .join(format!("trackr-icon-{}.svg", size))
}

/// Files written by a generation run, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub html: PathBuf,
    pub svgs: Vec<PathBuf>,
}

/// Write the export page and every standalone SVG
///
/// Existing files are overwritten. The first filesystem error aborts the
/// run; files already written are left in place.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    let html = assemble_with_config(&config.specs, &config.icon, &config.palette);
    let html_path = config.output_dir.join(HTML_FILENAME);
    write_file(&html_path, &html)?;

    let assets = config.output_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets).map_err(|e| GenerateError::io(&assets, e))?;

    let mut svgs = Vec::with_capacity(STANDALONE_SIZES.len());
    for &size in STANDALONE_SIZES {
        let path = svg_path(&config.output_dir, size);
        write_file(&path, &render_icon_with_config(size, &config.icon, &config.palette))?;
        svgs.push(path);
    }

    Ok(GenerationReport {
        html: html_path,
        svgs,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|e| GenerateError::io(path, e))
}
