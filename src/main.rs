//! Trackr icons CLI
//!
//! Usage:
//!   trackr-icons [OPTIONS]
//!
//! Options:
//!   -o, --output-dir <DIR>   Directory to write into (default: current directory)
//!   -p, --palette <FILE>     Palette override (TOML format)
//!   --label <TEXT>           Text drawn on the icon
//!   --stdout <SIZE>          Print the SVG for one size and exit
//!   -q, --quiet              Suppress progress messages
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;

use trackr_icons::{
    generate, render_icon_with_config, GenerateError, GeneratorConfig, IconConfig, Palette,
};

#[derive(Parser)]
#[command(name = "trackr-icons")]
#[command(about = "Generate Trackr app icon SVGs and an HTML export page")]
struct Cli {
    /// Directory to write the page and assets/ folder into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Palette file overriding icon colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Text drawn in the middle of the icon
    #[arg(long)]
    label: Option<String>,

    /// Print the SVG for a single size to stdout instead of writing files
    #[arg(long, value_name = "SIZE")]
    stdout: Option<u32>,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), GenerateError> {
    let palette = match &cli.palette {
        Some(path) => Palette::from_file(path).map_err(|e| GenerateError::palette(path, e))?,
        None => Palette::default(),
    };

    let mut icon = IconConfig::new();
    if let Some(label) = cli.label {
        icon = icon.with_label(label);
    }

    if let Some(size) = cli.stdout {
        println!("{}", render_icon_with_config(size, &icon, &palette));
        return Ok(());
    }

    let config = GeneratorConfig::new()
        .with_output_dir(cli.output_dir)
        .with_icon(icon)
        .with_palette(palette);

    let report = generate(&config)?;
    if !cli.quiet {
        println!("✅ App icon generator created: {}", report.html.display());
        println!("🌐 Open this file in your web browser to download all icon sizes");
        for path in &report.svgs {
            println!("📄 Created: {}", path.display());
        }
    }
    Ok(())
}
