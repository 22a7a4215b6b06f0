//! Icon specifications and rendered icons

/// One icon the page should offer for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Edge length in pixels
    pub size: u32,
    /// Filename the user should save the image as
    pub filename: &'static str,
    /// Where the icon is used
    pub usage: &'static str,
}

impl IconSpec {
    pub const fn new(size: u32, filename: &'static str, usage: &'static str) -> Self {
        Self {
            size,
            filename,
            usage,
        }
    }
}

/// Icons required for the App Store, Play Store and the web, largest first
pub const APP_ICONS: &[IconSpec] = &[
    IconSpec::new(1024, "icon.png", "App Store & iOS App Icon"),
    IconSpec::new(512, "adaptive-icon.png", "Android Adaptive Icon"),
    IconSpec::new(180, "ios-180.png", "iPhone @3x (60pt)"),
    IconSpec::new(120, "ios-120.png", "iPhone @2x (60pt)"),
    IconSpec::new(32, "favicon.png", "Web Favicon"),
];

/// Sizes written as standalone SVG files under `assets/`
pub const STANDALONE_SIZES: &[u32] = &[1024, 512, 180, 120, 32];

/// An icon rendered for embedding in the export page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub size: u32,
    pub svg_markup: String,
    pub base64_payload: String,
}

impl RenderedIcon {
    /// The `data:` URI used as the `<img>` source
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", self.base64_payload)
    }
}
