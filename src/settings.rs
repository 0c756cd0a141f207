//! Settings file loading.
//!
//! The settings file is optional TOML holding default styling values and
//! extra font search paths:
//!
//! ```toml
//! [defaults]
//! width = 1200
//! background = "#222"
//! align = "left"
//!
//! [fonts]
//! search_paths = ["/opt/fonts"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::params::TextAlign;

/// Environment variable overriding the settings file location.
pub const CONFIG_ENV: &str = "CLASSBANNERS_CONFIG";

/// Top-level settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default values used when a command-line flag is not given.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Font lookup settings.
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Default styling values. Unset fields fall back to built-in defaults.
///
/// Numbers are signed so that invalid values are reported by config
/// validation with the field name rather than as a TOML type error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Banner width.
    pub width: Option<i64>,
    /// Banner height.
    pub height: Option<i64>,
    /// Background color.
    pub background: Option<String>,
    /// Text color.
    pub color: Option<String>,
    /// Title font size.
    pub font_size: Option<i64>,
    /// Custom font file.
    pub font: Option<PathBuf>,
    /// Horizontal padding.
    pub padding: Option<i64>,
    /// Border width.
    pub border_width: Option<i64>,
    /// Border color.
    pub border_color: Option<String>,
    /// Text alignment.
    pub align: Option<TextAlign>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Output format name.
    pub format: Option<String>,
}

/// Font lookup settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontsConfig {
    /// Font files or directories searched for the default font before the
    /// standard system locations.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

impl Settings {
    /// Load settings from the given path, or return defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
        let settings =
            toml::from_str(&contents).map_err(|e| format!("Failed to parse settings {}: {e}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Discover the settings file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CLASSBANNERS_CONFIG` environment variable
/// 3. `~/.config/classbanners/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default settings path: `~/.config/classbanners/config.toml`.
fn default_config_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config/classbanners/config.toml"),
        None => PathBuf::from("classbanners.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert!(settings.defaults.width.is_none());
        assert!(settings.defaults.align.is_none());
        assert!(settings.fonts.search_paths.is_empty());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(settings.defaults.background.is_none());
    }

    #[test]
    fn load_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[defaults]
width = 1200
height = 300
background = "#222"
color = "#EEEEEE"
font_size = 64
font = "/opt/fonts/Custom.ttf"
padding = 8
border_width = 2
border_color = "#FF0000"
align = "right"
output = "out/banner.jpg"
format = "jpeg"

[fonts]
search_paths = ["/opt/fonts", "/srv/fonts/Sans.ttf"]
"##,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        let d = &settings.defaults;
        assert_eq!(d.width, Some(1200));
        assert_eq!(d.height, Some(300));
        assert_eq!(d.background.as_deref(), Some("#222"));
        assert_eq!(d.color.as_deref(), Some("#EEEEEE"));
        assert_eq!(d.font_size, Some(64));
        assert_eq!(d.font.as_deref(), Some(Path::new("/opt/fonts/Custom.ttf")));
        assert_eq!(d.padding, Some(8));
        assert_eq!(d.border_width, Some(2));
        assert_eq!(d.border_color.as_deref(), Some("#FF0000"));
        assert_eq!(d.align, Some(TextAlign::Right));
        assert_eq!(d.output.as_deref(), Some(Path::new("out/banner.jpg")));
        assert_eq!(d.format.as_deref(), Some("jpeg"));
        assert_eq!(settings.fonts.search_paths.len(), 2);
    }

    #[test]
    fn negative_values_parse_for_later_validation() {
        let settings: Settings = toml::from_str("[defaults]\nwidth = -5\n").unwrap();
        assert_eq!(settings.defaults.width, Some(-5));
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<Settings>("[defaults]\nwidht = 10\n").is_err());
        assert!(toml::from_str::<Settings>("[defaults]\nalign = \"justify\"\n").is_err());
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some(Path::new("/tmp/my-config.toml")));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
