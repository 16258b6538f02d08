use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the page title in the carousel border
    #[serde(default = "default_true")]
    pub show_title: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_title: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Position-indicator visibility policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Always show the indicator
    Always,
    /// Show the indicator only when the deck has more than one page
    Auto,
    /// Never show the indicator
    Never,
}

/// Dot glyph size for the position indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotSize {
    Small,
    Medium,
    Large,
}

impl DotSize {
    /// Terminal glyph for the size
    pub fn glyph(self) -> &'static str {
        match self {
            DotSize::Small => "·",
            DotSize::Medium => "•",
            DotSize::Large => "●",
        }
    }
}

/// Dot-style position-indicator configuration
///
/// Colors are hex strings ("#RRGGBB"); unset colors fall back to the theme's
/// grey (plain dots) and accent (current dot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Color of non-current dots
    #[serde(default)]
    pub dot_color: Option<String>,
    /// Glyph size of non-current dots
    #[serde(default = "default_dot_size")]
    pub dot_size: DotSize,
    /// Color of the current-page dot
    #[serde(default)]
    pub current_dot_color: Option<String>,
    /// Glyph size of the current-page dot
    #[serde(default = "default_current_dot_size")]
    pub current_dot_size: DotSize,
    /// Columns between adjacent dots
    #[serde(default = "default_dot_spacing")]
    pub dot_spacing: u16,
    /// Animate the page slide when the current page changes
    #[serde(default = "default_true")]
    pub animated: bool,
    /// When the indicator is shown at all
    #[serde(default = "default_display_mode")]
    pub display_mode: DisplayMode,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            dot_color: None,
            dot_size: default_dot_size(),
            current_dot_color: None,
            current_dot_size: default_current_dot_size(),
            dot_spacing: default_dot_spacing(),
            animated: default_true(),
            display_mode: default_display_mode(),
        }
    }
}

/// Easing curve for page-slide transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

/// Page-slide transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Enable slide transitions globally (the indicator's `animated` flag
    /// still gates individual slides)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Slide duration in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Animation frame rate
    #[serde(default = "default_transition_fps")]
    pub fps: u16,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: default_easing(),
            fps: default_transition_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            // Accept a simple string as just the theme name
            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            // Accept a map/struct with 'name' and optional 'colors'
            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            // Ignore unknown fields
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (slightly lighter)
    pub bg1: Option<String>,
    /// Tertiary background (status bar)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Muted foreground (borders, inactive dots)
    pub grey0: Option<String>,
    /// Hint foreground
    pub grey1: Option<String>,
    /// Accent color (current dot, focused border)
    pub accent: Option<String>,
    /// Error color
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Show the next page
    #[serde(default = "default_key_next_page")]
    pub next_page: String,
    /// Show the previous page
    #[serde(default = "default_key_prev_page")]
    pub prev_page: String,
    /// Jump to the first page
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    /// Jump to the last page
    #[serde(default = "default_key_last_page")]
    pub last_page: String,
    /// Toggle the position indicator
    #[serde(default = "default_key_toggle_indicator")]
    pub toggle_indicator: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_page: default_key_next_page(),
            prev_page: default_key_prev_page(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            toggle_indicator: default_key_toggle_indicator(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_page() -> String { "l".to_string() }
fn default_key_prev_page() -> String { "h".to_string() }
fn default_key_first_page() -> String { "gg".to_string() }
fn default_key_last_page() -> String { "G".to_string() }
fn default_key_toggle_indicator() -> String { "i".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_dot_size() -> DotSize {
    DotSize::Medium
}

fn default_current_dot_size() -> DotSize {
    DotSize::Large
}

fn default_dot_spacing() -> u16 {
    1
}

fn default_display_mode() -> DisplayMode {
    DisplayMode::Auto
}

fn default_transition_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_transition_fps() -> u16 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagedeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagedeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.indicator.display_mode, DisplayMode::Auto);
        assert_eq!(config.indicator.dot_size, DotSize::Medium);
        assert_eq!(config.indicator.current_dot_size, DotSize::Large);
        assert_eq!(config.indicator.dot_spacing, 1);
        assert!(config.indicator.animated);
        assert!(config.transition.enabled);
        assert_eq!(config.transition.duration_ms, 150);
        assert_eq!(config.transition.easing, EasingType::Cubic);
        assert_eq!(config.transition.fps, 60);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [indicator]
            display_mode = "never"
            dot_spacing = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.indicator.display_mode, DisplayMode::Never);
        assert_eq!(config.indicator.dot_spacing, 3);
        // untouched sections keep defaults
        assert_eq!(config.keymap.quit, "q");
        assert!(config.transition.enabled);
    }

    #[test]
    fn test_theme_accepts_string_or_struct() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "gruvbox-dark"

            [ui.theme.colors]
            accent = "#d3869b"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#d3869b"));
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = AppConfig::default();
        config.indicator.dot_color = Some("#7c6f64".to_string());
        config.transition.easing = EasingType::Quintic;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.indicator.dot_color.as_deref(), Some("#7c6f64"));
        assert_eq!(parsed.transition.easing, EasingType::Quintic);
    }

    #[test]
    fn test_dot_glyphs() {
        assert_eq!(DotSize::Small.glyph(), "·");
        assert_eq!(DotSize::Medium.glyph(), "•");
        assert_eq!(DotSize::Large.glyph(), "●");
    }
}
