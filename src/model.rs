//! Banner configuration and the banner aggregate.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, ImageFormat};

use crate::adapters::viewer::SystemViewer;
use crate::error::{BannerError, ConfigError};
use crate::output::save_image;
use crate::params::{HexColor, TextAlign};
use crate::ports::ImageViewer;

/// Default banner width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default banner height in pixels.
pub const DEFAULT_HEIGHT: u32 = 200;
/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#4A90D9";
/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
/// Default border color.
pub const DEFAULT_BORDER_COLOR: &str = "#000000";
/// Default title font size.
pub const DEFAULT_FONT_SIZE: u32 = 48;
/// Default horizontal padding for left/right aligned text.
pub const DEFAULT_PADDING: u32 = 20;

/// Largest accepted value for any numeric field.
const MAX_VALUE: i64 = i32::MAX as i64;

/// Validated, immutable rendering options for a banner.
///
/// Build one with [`BannerConfig::builder`]; there are no mutators, so a
/// config can be shared between banners (and threads) behind an [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    width: u32,
    height: u32,
    background_color: HexColor,
    text_color: HexColor,
    font_size: u32,
    font_path: Option<PathBuf>,
    padding: u32,
    border_width: u32,
    border_color: HexColor,
    text_align: TextAlign,
}

impl BannerConfig {
    /// Start building a config from the documented defaults.
    #[must_use]
    pub fn builder() -> BannerConfigBuilder {
        BannerConfigBuilder::default()
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Background fill color.
    #[must_use]
    pub fn background_color(&self) -> &HexColor {
        &self.background_color
    }

    /// Color of the title and subtitle.
    #[must_use]
    pub fn text_color(&self) -> &HexColor {
        &self.text_color
    }

    /// Title font size; the subtitle uses half of it.
    #[must_use]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Custom font file, if any.
    #[must_use]
    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    /// Minimum inset from the horizontal edges for left/right aligned text.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Border stroke width; zero disables the border.
    #[must_use]
    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Border stroke color.
    #[must_use]
    pub fn border_color(&self) -> &HexColor {
        &self.border_color
    }

    /// Horizontal text alignment.
    #[must_use]
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        let color = |value: &str| {
            HexColor::parse("default", value)
                .unwrap_or_else(|e| unreachable!("built-in default color is valid: {e}"))
        };
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background_color: color(DEFAULT_BACKGROUND),
            text_color: color(DEFAULT_TEXT_COLOR),
            font_size: DEFAULT_FONT_SIZE,
            font_path: None,
            padding: DEFAULT_PADDING,
            border_width: 0,
            border_color: color(DEFAULT_BORDER_COLOR),
            text_align: TextAlign::Center,
        }
    }
}

/// Unvalidated inputs for a [`BannerConfig`].
///
/// Numeric setters take `i64` so that negative values coming from a CLI or
/// a settings file reach validation instead of being lost in a conversion.
#[derive(Debug, Clone)]
pub struct BannerConfigBuilder {
    width: i64,
    height: i64,
    background_color: String,
    text_color: String,
    font_size: i64,
    font_path: Option<PathBuf>,
    padding: i64,
    border_width: i64,
    border_color: String,
    text_align: TextAlign,
}

impl Default for BannerConfigBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.into(),
            height: DEFAULT_HEIGHT.into(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE.into(),
            font_path: None,
            padding: DEFAULT_PADDING.into(),
            border_width: 0,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            text_align: TextAlign::Center,
        }
    }
}

impl BannerConfigBuilder {
    /// Set the canvas width.
    #[must_use]
    pub fn width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    /// Set the canvas height.
    #[must_use]
    pub fn height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the text color.
    #[must_use]
    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the title font size.
    #[must_use]
    pub fn font_size(mut self, size: i64) -> Self {
        self.font_size = size;
        self
    }

    /// Set (or clear) the custom font file.
    #[must_use]
    pub fn font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }

    /// Set the horizontal padding.
    #[must_use]
    pub fn padding(mut self, padding: i64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the border width.
    #[must_use]
    pub fn border_width(mut self, width: i64) -> Self {
        self.border_width = width;
        self
    }

    /// Set the border color.
    #[must_use]
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    /// Set the text alignment.
    #[must_use]
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Validate all fields and produce the config.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking dimensions, font
    /// size, padding, border width and then the three colors.
    pub fn build(self) -> Result<BannerConfig, ConfigError> {
        let width = positive("width", self.width)?;
        let height = positive("height", self.height)?;
        let font_size = positive("font_size", self.font_size)?;
        let padding = non_negative("padding", self.padding)?;
        let border_width = non_negative("border_width", self.border_width)?;
        let background_color = HexColor::parse("background_color", &self.background_color)?;
        let text_color = HexColor::parse("text_color", &self.text_color)?;
        let border_color = HexColor::parse("border_color", &self.border_color)?;

        Ok(BannerConfig {
            width,
            height,
            background_color,
            text_color,
            font_size,
            font_path: self.font_path,
            padding,
            border_width,
            border_color,
            text_align: self.text_align,
        })
    }
}

fn positive(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    bounded(field, value)
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Negative { field, value });
    }
    bounded(field, value)
}

fn bounded(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    let too_large = ConfigError::TooLarge { field, value, max: MAX_VALUE };
    if value > MAX_VALUE {
        return Err(too_large);
    }
    u32::try_from(value).map_err(|_| too_large)
}

/// A banner: title, optional subtitle, the config to draw it with, and the
/// rendered image once a generator has produced one.
#[derive(Debug, Clone)]
pub struct Banner {
    /// Primary line of text.
    pub title: String,
    /// Second, smaller line; empty means no subtitle.
    pub subtitle: String,
    /// Rendering options, shareable across banners.
    pub config: Arc<BannerConfig>,
    /// Rendered image; `None` until the banner is generated.
    pub image: Option<DynamicImage>,
}

impl Banner {
    /// Create an unrendered banner with the default config.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            config: Arc::new(BannerConfig::default()),
            image: None,
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Use the given config instead of the default one.
    #[must_use]
    pub fn with_config(mut self, config: impl Into<Arc<BannerConfig>>) -> Self {
        self.config = config.into();
        self
    }

    /// Whether a subtitle line will be drawn.
    #[must_use]
    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }

    /// Save the rendered image, creating missing parent directories.
    ///
    /// The format is inferred from the extension of `path` unless given.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::NotRendered`] if the banner hasn't been
    /// generated, or an I/O or encoding error if writing fails.
    pub fn save(&self, path: impl AsRef<Path>, format: Option<ImageFormat>) -> Result<(), BannerError> {
        let image = self.image.as_ref().ok_or(BannerError::NotRendered { action: "save" })?;
        save_image(image, path.as_ref(), format)
    }

    /// Display the rendered image with the platform's image viewer.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::NotRendered`] if the banner hasn't been
    /// generated, or [`BannerError::Display`] if no viewer could be launched.
    pub fn show(&self) -> Result<(), BannerError> {
        self.show_with(&SystemViewer::new())
    }

    /// Display the rendered image with the given viewer.
    ///
    /// # Errors
    ///
    /// Same as [`Banner::show`].
    pub fn show_with(&self, viewer: &dyn ImageViewer) -> Result<(), BannerError> {
        let image = self.image.as_ref().ok_or(BannerError::NotRendered { action: "show" })?;
        viewer.display(image)
    }
}
