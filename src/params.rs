//! Styling parameter types: hex colors, text alignment and output formats.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use image::{ImageFormat, Rgb, Rgba};
use regex::Regex;
use serde::Deserialize;

use crate::error::ConfigError;

/// `#` followed by 3, 4, 6 or 8 hex digits.
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .unwrap_or_else(|e| unreachable!("hex color pattern is valid: {e}"))
});

/// Whether `value` is a well-formed hex color string.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// A validated hex color such as `#4A90D9` or `#FFF8`.
///
/// Keeps the string it was created from, so configuration getters return
/// exactly what the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    raw: String,
    rgba: [u8; 4],
}

impl HexColor {
    /// Validate and parse `value`, attributing failures to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] if `value` isn't a hex color.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor { field, value: value.to_string() };
        if !is_hex_color(value) {
            return Err(invalid());
        }
        let rgba = channels(&value[1..]).ok_or_else(invalid)?;
        Ok(Self { raw: value.to_string(), rgba })
    }

    /// The color string as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed channels, alpha included (opaque unless 4 or 8 digits were given).
    #[must_use]
    pub fn rgba(&self) -> Rgba<u8> {
        Rgba(self.rgba)
    }

    /// The color with alpha dropped, as drawn onto the canvas.
    #[must_use]
    pub fn rgb(&self) -> Rgb<u8> {
        let [r, g, b, _] = self.rgba;
        Rgb([r, g, b])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Expand hex digits (without `#`) into RGBA channels.
/// Short forms double each digit, so `#ABC` is `#AABBCC`.
fn channels(digits: &str) -> Option<[u8; 4]> {
    let pairs: Vec<String> = match digits.len() {
        3 | 4 => digits.chars().map(|c| format!("{c}{c}")).collect(),
        6 | 8 => digits
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect(),
        _ => return None,
    };

    let mut rgba = [0, 0, 0, u8::MAX];
    for (slot, pair) in rgba.iter_mut().zip(&pairs) {
        *slot = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(rgba)
}

/// Horizontal placement of a text line within the banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start at `padding` from the left edge.
    Left,
    /// Centered; padding is ignored.
    #[default]
    Center,
    /// End at `padding` from the right edge.
    Right,
}

impl TextAlign {
    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(format!("Unsupported alignment '{s}'. Valid: left, center, right")),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an explicit output format name such as `png` or `jpeg`.
///
/// # Errors
///
/// Returns an error if the name is unknown or the format can't be written.
pub fn parse_format(name: &str) -> Result<ImageFormat, String> {
    ImageFormat::from_extension(name.to_ascii_lowercase())
        .filter(ImageFormat::writing_enabled)
        .ok_or_else(|| format!("Unsupported format '{name}'. Valid: png, jpeg, webp, bmp, gif, tiff"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_digit_counts() {
        for color in ["#ABC", "#FFF", "#abcd", "#4A90D9", "#FF0000FF", "#00FF00AA"] {
            assert!(is_hex_color(color), "{color} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_colors() {
        for color in ["invalid", "red", "#GGG", "", "#", "#12", "#12345", "#1234567", "#123456789", "FF0000", " #FFF"] {
            assert!(!is_hex_color(color), "{color:?} should be invalid");
        }
    }

    #[test]
    fn parse_keeps_original_string() {
        let color = HexColor::parse("background_color", "#4a90D9").unwrap();
        assert_eq!(color.as_str(), "#4a90D9");
        assert_eq!(color.to_string(), "#4a90D9");
    }

    #[test]
    fn parse_expands_short_forms() {
        assert_eq!(HexColor::parse("c", "#ABC").unwrap().rgba(), Rgba([0xAA, 0xBB, 0xCC, 0xFF]));
        assert_eq!(HexColor::parse("c", "#F008").unwrap().rgba(), Rgba([0xFF, 0x00, 0x00, 0x88]));
    }

    #[test]
    fn parse_long_forms() {
        assert_eq!(HexColor::parse("c", "#4A90D9").unwrap().rgb(), Rgb([0x4A, 0x90, 0xD9]));
        assert_eq!(HexColor::parse("c", "#00FF00AA").unwrap().rgba(), Rgba([0, 0xFF, 0, 0xAA]));
    }

    #[test]
    fn parse_error_names_field() {
        let err = HexColor::parse("border_color", "#GGG").unwrap_err();
        assert_eq!(err.field(), "border_color");
    }

    #[test]
    fn align_from_str() {
        assert_eq!("left".parse::<TextAlign>().unwrap(), TextAlign::Left);
        assert_eq!("CENTER".parse::<TextAlign>().unwrap(), TextAlign::Center);
        assert_eq!("right".parse::<TextAlign>().unwrap(), TextAlign::Right);
        assert!("justify".parse::<TextAlign>().is_err());
    }

    #[test]
    fn align_defaults_to_center() {
        assert_eq!(TextAlign::default(), TextAlign::Center);
    }

    #[test]
    fn format_names() {
        assert_eq!(parse_format("png").unwrap(), ImageFormat::Png);
        assert_eq!(parse_format("JPEG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(parse_format("jpg").unwrap(), ImageFormat::Jpeg);
        assert!(parse_format("psd").is_err());
    }
}
