use pagedeck_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

impl Theme {
    /// Gruvbox Material dark
    pub fn gruvbox_dark() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }

    /// Nord
    pub fn nord() -> Self {
        Self {
            bg0: Color::Rgb(0x2e, 0x34, 0x40),
            bg1: Color::Rgb(0x3b, 0x42, 0x52),
            bg2: Color::Rgb(0x43, 0x4c, 0x5e),
            fg0: Color::Rgb(0xec, 0xef, 0xf4),
            fg1: Color::Rgb(0xe5, 0xe9, 0xf0),
            grey0: Color::Rgb(0x4c, 0x56, 0x6a),
            grey1: Color::Rgb(0x61, 0x6e, 0x88),
            accent: Color::Rgb(0x88, 0xc0, 0xd0),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
        }
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Build the runtime theme from configuration
///
/// Unknown theme names fall back to the default with a warning; overrides
/// that fail to parse are skipped.
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let mut theme = match config.name.as_str() {
        "gruvbox-dark" => Theme::gruvbox_dark(),
        "nord" => Theme::nord(),
        other => {
            warn!("Unknown theme '{}', using gruvbox-dark", other);
            Theme::gruvbox_dark()
        }
    };
    apply_overrides(&mut theme, &config.colors);
    theme
}

fn apply_overrides(theme: &mut Theme, overrides: &ThemeColorOverrides) {
    let mut apply = |slot: &mut Color, value: &Option<String>, name: &str| {
        if let Some(hex) = value {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color override for {}: '{}'", name, hex),
            }
        }
    };

    apply(&mut theme.bg0, &overrides.bg0, "bg0");
    apply(&mut theme.bg1, &overrides.bg1, "bg1");
    apply(&mut theme.bg2, &overrides.bg2, "bg2");
    apply(&mut theme.fg0, &overrides.fg0, "fg0");
    apply(&mut theme.fg1, &overrides.fg1, "fg1");
    apply(&mut theme.grey0, &overrides.grey0, "grey0");
    apply(&mut theme.grey1, &overrides.grey1, "grey1");
    apply(&mut theme.accent, &overrides.accent, "accent");
    apply(&mut theme.error, &overrides.error, "error");
}
