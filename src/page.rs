//! HTML export page
//!
//! Every icon is embedded as a base64 `data:` URI so the page is fully
//! self-contained; a human opens it in a browser and saves each image.

use base64::{engine::general_purpose, Engine as _};

use crate::error::PayloadError;
use crate::icon::{IconSpec, RenderedIcon};
use crate::palette::Palette;
use crate::renderer::svg::escape_xml;
use crate::renderer::{render_icon_with_config, IconConfig};

/// Largest on-page preview edge, in CSS pixels
const MAX_PREVIEW: u32 = 200;

const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Trackr App Icon Generator</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, sans-serif;
            padding: 20px;
            background: #f5f5f5;
        }
        .icon-container {
            display: inline-block;
            margin: 10px;
            text-align: center;
            background: white;
            padding: 15px;
            border-radius: 10px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        .icon {
            border-radius: 15px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.15);
        }
        .instructions {
            background: white;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { color: #1a1a1a; margin-bottom: 20px; }
        h2 { color: #333; margin-bottom: 15px; }
        .size-label {
            margin-top: 10px;
            font-weight: 600;
            color: #666;
        }
        .usage {
            font-size: 12px;
            color: #888;
        }
    </style>
</head>
<body>
    <h1>📱 Trackr App Icon Generator</h1>

    <div class="instructions">
        <h2>🎯 How to Save Icons:</h2>
        <ol>
            <li><strong>Right-click</strong> on each icon below</li>
            <li>Select <strong>"Save Image As..."</strong></li>
            <li>Save with the filename shown under each icon</li>
            <li>Replace the files in your <code>assets/</code> folder</li>
        </ol>

        <h2>📋 Required for App Store:</h2>
        <ul>
            <li><strong>icon.png</strong> - Main app icon (1024x1024)</li>
            <li><strong>adaptive-icon.png</strong> - Android adaptive icon</li>
            <li><strong>favicon.png</strong> - Web favicon</li>
        </ul>
    </div>"#;

const FOOTER: &str = r#"

    <div style="margin-top: 30px; padding: 20px; background: #e8f5e8; border-radius: 10px;">
        <h2>✅ Next Steps:</h2>
        <ol>
            <li>Save all icons using right-click → "Save Image As..."</li>
            <li>Replace existing files in <code>assets/</code> folder</li>
            <li>Commit changes to git</li>
            <li>Rebuild your app with <code>eas build --platform ios --profile production</code></li>
            <li>Upload to App Store Connect</li>
        </ol>
    </div>

</body>
</html>"#;

/// Render every spec, in order, and encode it for embedding
pub fn render_all(
    specs: &[IconSpec],
    config: &IconConfig,
    palette: &Palette,
) -> Vec<RenderedIcon> {
    specs
        .iter()
        .map(|spec| {
            let svg_markup = render_icon_with_config(spec.size, config, palette);
            let base64_payload = general_purpose::STANDARD.encode(svg_markup.as_bytes());
            RenderedIcon {
                size: spec.size,
                svg_markup,
                base64_payload,
            }
        })
        .collect()
}

/// Assemble the export page with the default look
pub fn assemble(specs: &[IconSpec]) -> String {
    assemble_with_config(specs, &IconConfig::default(), &Palette::default())
}

/// Assemble the export page with custom proportions and colors
pub fn assemble_with_config(specs: &[IconSpec], config: &IconConfig, palette: &Palette) -> String {
    let rendered = render_all(specs, config, palette);

    let mut html = String::from(HEADER);
    for (spec, icon) in specs.iter().zip(&rendered) {
        html.push_str(&icon_block(spec, icon));
    }
    html.push_str(FOOTER);
    html
}

fn icon_block(spec: &IconSpec, icon: &RenderedIcon) -> String {
    let size = spec.size;
    let preview = size.min(MAX_PREVIEW);
    format!(
        r#"
    <div class="icon-container">
        <img src="{}"
             width="{preview}" height="{preview}"
             class="icon" alt="Trackr Icon {size}x{size}">
        <div class="size-label">{}</div>
        <div class="usage">{size}×{size} - {}</div>
    </div>"#,
        icon.data_uri(),
        escape_xml(spec.filename),
        escape_xml(spec.usage),
    )
}

/// Decode every embedded icon payload, in document order
pub fn decode_payloads(html: &str) -> Result<Vec<String>, PayloadError> {
    html.split(DATA_URI_PREFIX)
        .skip(1)
        .map(|rest| -> Result<String, PayloadError> {
            let end = rest.find('"').unwrap_or(rest.len());
            let bytes = general_purpose::STANDARD.decode(&rest[..end])?;
            Ok(String::from_utf8(bytes)?)
        })
        .collect()
}
