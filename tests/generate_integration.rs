//! End-to-end tests for writing the export page and standalone SVGs

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use trackr_icons::{
    decode_payloads, generate, output::svg_path, render_icon, GenerateError, GeneratorConfig,
    Palette, APP_ICONS, ASSETS_DIR, HTML_FILENAME, STANDALONE_SIZES,
};

#[test]
fn test_generate_writes_page_and_assets() {
    let dir = tempdir().expect("tempdir");
    let config = GeneratorConfig::new().with_output_dir(dir.path());

    let report = generate(&config).expect("Should generate");

    assert_eq!(report.html, dir.path().join(HTML_FILENAME));
    assert_eq!(report.svgs.len(), STANDALONE_SIZES.len());

    let html = fs::read_to_string(&report.html).expect("Should read page");
    assert_eq!(html.matches(r#"class="icon-container""#).count(), 5);

    // Labels appear in configured order
    let positions: Vec<usize> = [
        "icon.png",
        "adaptive-icon.png",
        "ios-180.png",
        "ios-120.png",
        "favicon.png",
    ]
    .iter()
    .map(|name| {
        html.find(&format!(r#"<div class="size-label">{}</div>"#, name))
            .unwrap_or_else(|| panic!("missing block for {}", name))
    })
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    for &size in STANDALONE_SIZES {
        let path = svg_path(dir.path(), size);
        let svg = fs::read_to_string(&path).expect("Should read svg");
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(&format!(r#"<svg width="{size}" height="{size}""#)));
        assert_eq!(svg.matches("<svg").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert_eq!(svg, render_icon(size));
    }
}

#[test]
fn test_embedded_payloads_match_rendered_icons() {
    let dir = tempdir().expect("tempdir");
    let report =
        generate(&GeneratorConfig::new().with_output_dir(dir.path())).expect("Should generate");

    let html = fs::read_to_string(&report.html).expect("Should read page");
    let decoded = decode_payloads(&html).expect("Should decode");
    let expected: Vec<String> = APP_ICONS.iter().map(|s| render_icon(s.size)).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn test_generate_is_idempotent() {
    let dir = tempdir().expect("tempdir");
    let config = GeneratorConfig::new().with_output_dir(dir.path());

    let first = generate(&config).expect("first run");
    let html_before = fs::read(&first.html).unwrap();
    let svgs_before: Vec<Vec<u8>> = first.svgs.iter().map(|p| fs::read(p).unwrap()).collect();

    let second = generate(&config).expect("second run");
    assert_eq!(first, second);
    assert_eq!(fs::read(&second.html).unwrap(), html_before);
    let svgs_after: Vec<Vec<u8>> = second.svgs.iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(svgs_after, svgs_before);
}

#[test]
fn test_generate_creates_missing_directories() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("web").join("public");
    fs::create_dir_all(&nested).unwrap();

    generate(&GeneratorConfig::new().with_output_dir(&nested)).expect("Should generate");
    assert!(nested.join(ASSETS_DIR).is_dir());
}

#[test]
fn test_generate_overwrites_existing_files() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join(ASSETS_DIR)).unwrap();
    fs::write(dir.path().join(HTML_FILENAME), "stale").unwrap();
    fs::write(svg_path(dir.path(), 32), "stale").unwrap();

    generate(&GeneratorConfig::new().with_output_dir(dir.path())).expect("Should generate");

    assert_ne!(fs::read_to_string(dir.path().join(HTML_FILENAME)).unwrap(), "stale");
    assert_eq!(fs::read_to_string(svg_path(dir.path(), 32)).unwrap(), render_icon(32));
}

#[test]
fn test_assets_path_blocked_by_file_is_fatal() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(ASSETS_DIR), "not a directory").unwrap();

    let err = generate(&GeneratorConfig::new().with_output_dir(dir.path())).unwrap_err();
    match err {
        GenerateError::Io { path, .. } => assert_eq!(path, dir.path().join(ASSETS_DIR)),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_output_dir_that_is_a_file_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let result = generate(&GeneratorConfig::new().with_output_dir(&file));
    assert!(matches!(result, Err(GenerateError::Io { .. })));
}

#[test]
fn test_palette_file_recolors_output() {
    let dir = tempdir().expect("tempdir");
    let palette_path = dir.path().join("palette.toml");
    fs::write(
        &palette_path,
        r##"
[metadata]
name = "Orange"

[colors]
accent = "#ff9800"
"##,
    )
    .unwrap();

    let palette = Palette::from_file(&palette_path).expect("Should load palette");
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    generate(
        &GeneratorConfig::new()
            .with_output_dir(&out)
            .with_palette(palette),
    )
    .expect("Should generate");

    let svg = fs::read_to_string(svg_path(&out, 512)).unwrap();
    assert!(svg.contains(r##"stroke="#ff9800""##));
    assert!(svg.contains(r##"stop-color="#1a1a1a""##));
}
