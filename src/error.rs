//! Error types for banner configuration, rendering and output.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected [`BannerConfig`](crate::model::BannerConfig) field.
///
/// Construction fails on the first invalid field, so no partially valid
/// configuration is ever observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A dimension or size that must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The supplied value.
        value: i64,
    },

    /// An inset or stroke width that must not be negative.
    #[error("{field} cannot be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The supplied value.
        value: i64,
    },

    /// A value too large to address on a canvas.
    #[error("{field} is too large, got {value} (max {max})")]
    TooLarge {
        /// Name of the offending field.
        field: &'static str,
        /// The supplied value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A color that doesn't match the `#RGB[A]` / `#RRGGBB[AA]` grammar.
    #[error("{field} must be a valid hex color (e.g., '#FF0000'), got '{value}'")]
    InvalidColor {
        /// Name of the offending field.
        field: &'static str,
        /// The supplied string.
        value: String,
    },
}

impl ConfigError {
    /// Name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::TooLarge { field, .. }
            | Self::InvalidColor { field, .. } => field,
        }
    }
}

/// Why a single font source could not provide a typeface.
///
/// Never surfaced to callers of the renderer; resolution logs it and moves
/// on to the next source.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file {}: {source}", path.display())]
    Read {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file was read but isn't a usable TrueType/OpenType font.
    #[error("{} does not contain a usable font", path.display())]
    Parse {
        /// Path that was tried.
        path: PathBuf,
    },

    /// None of the candidate locations held a font.
    #[error("no default font found in {searched} location(s)")]
    NotFound {
        /// Number of candidate paths inspected.
        searched: usize,
    },
}

/// Errors that can occur while building, saving or showing a banner.
#[derive(Debug, Error)]
pub enum BannerError {
    /// Invalid banner configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// `save`/`show` was called before the banner was rendered.
    #[error("No image to {action}. Generate the banner first.")]
    NotRendered {
        /// The attempted operation (`"save"` or `"show"`).
        action: &'static str,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or writing the image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Settings file error.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The platform image viewer could not be launched.
    #[error("Failed to display image: {0}")]
    Display(String),
}
