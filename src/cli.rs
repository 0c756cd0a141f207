//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use classbanners::settings::DefaultsConfig;
use classbanners::{BannerConfig, ConfigError, TextAlign};

/// Output path used when neither the command line nor the settings name one.
pub const DEFAULT_OUTPUT: &str = "banner.png";

/// Generate customizable class banners.
#[derive(Parser, Debug)]
#[command(name = "classbanners", version, about)]
pub struct Cli {
    /// Banner title text.
    pub title: String,

    /// Subtitle text.
    #[arg(short, long, default_value = "")]
    pub subtitle: String,

    /// Output file path [default: banner.png].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Banner width [default: 800].
    #[arg(short = 'W', long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Banner height [default: 200].
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Background color [default: #4A90D9].
    #[arg(short, long)]
    pub background: Option<String>,

    /// Text color [default: #FFFFFF].
    #[arg(short, long)]
    pub color: Option<String>,

    /// Font size [default: 48].
    #[arg(short, long, allow_negative_numbers = true)]
    pub font_size: Option<i64>,

    /// Path to custom font file.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Padding for left/right aligned text [default: 20].
    #[arg(long, allow_negative_numbers = true)]
    pub padding: Option<i64>,

    /// Border width, 0 for none [default: 0].
    #[arg(long, allow_negative_numbers = true)]
    pub border_width: Option<i64>,

    /// Border color [default: #000000].
    #[arg(long)]
    pub border_color: Option<String>,

    /// Text alignment [default: center].
    #[arg(short, long, value_enum)]
    pub align: Option<TextAlign>,

    /// Output format (png, jpeg, webp, ...), inferred from the extension if omitted.
    #[arg(long)]
    pub format: Option<String>,

    /// Settings file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Display the banner after generation.
    #[arg(long)]
    pub show: bool,

    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Cli {
    /// Build the banner config from flags, falling back to settings defaults
    /// and then built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn banner_config(&self, defaults: &DefaultsConfig) -> Result<BannerConfig, ConfigError> {
        let mut builder = BannerConfig::builder();
        if let Some(width) = self.width.or(defaults.width) {
            builder = builder.width(width);
        }
        if let Some(height) = self.height.or(defaults.height) {
            builder = builder.height(height);
        }
        if let Some(color) = self.background.as_ref().or(defaults.background.as_ref()) {
            builder = builder.background_color(color.as_str());
        }
        if let Some(color) = self.color.as_ref().or(defaults.color.as_ref()) {
            builder = builder.text_color(color.as_str());
        }
        if let Some(size) = self.font_size.or(defaults.font_size) {
            builder = builder.font_size(size);
        }
        if let Some(padding) = self.padding.or(defaults.padding) {
            builder = builder.padding(padding);
        }
        if let Some(width) = self.border_width.or(defaults.border_width) {
            builder = builder.border_width(width);
        }
        if let Some(color) = self.border_color.as_ref().or(defaults.border_color.as_ref()) {
            builder = builder.border_color(color.as_str());
        }
        if let Some(align) = self.align.or(defaults.align) {
            builder = builder.text_align(align);
        }
        builder.font_path(self.font.clone().or_else(|| defaults.font.clone())).build()
    }

    /// Where to write the banner.
    #[must_use]
    pub fn output_path(&self, defaults: &DefaultsConfig) -> PathBuf {
        self.output.clone().or_else(|| defaults.output.clone()).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Explicit output format name, if any.
    #[must_use]
    pub fn format_name<'a>(&'a self, defaults: &'a DefaultsConfig) -> Option<&'a str> {
        self.format.as_deref().or(defaults.format.as_deref())
    }

    /// Net verbosity: positive for `-v`, negative for `-q`.
    #[must_use]
    pub fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn required_title() {
        let cli = Cli::parse_from(["classbanners", "My Banner"]);
        assert_eq!(cli.title, "My Banner");
    }

    #[test]
    fn missing_title_is_an_error() {
        assert!(Cli::try_parse_from(["classbanners"]).is_err());
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from(["classbanners", "Title"]);
        assert_eq!(cli.subtitle, "");
        assert!(cli.output.is_none());
        assert!(cli.width.is_none());
        assert!(cli.font.is_none());
        assert!(!cli.show);
        assert_eq!(cli.verbosity(), 0);

        let defaults = DefaultsConfig::default();
        assert_eq!(cli.output_path(&defaults), PathBuf::from("banner.png"));
        assert!(cli.format_name(&defaults).is_none());
        let config = cli.banner_config(&defaults).unwrap();
        assert_eq!(config, BannerConfig::default());
    }

    #[test]
    fn custom_output() {
        let cli = Cli::parse_from(["classbanners", "Title", "-o", "custom.png"]);
        assert_eq!(cli.output_path(&DefaultsConfig::default()), PathBuf::from("custom.png"));
    }

    #[test]
    fn subtitle() {
        let cli = Cli::parse_from(["classbanners", "Title", "-s", "Subtitle"]);
        assert_eq!(cli.subtitle, "Subtitle");
    }

    #[test]
    fn dimensions() {
        let cli = Cli::parse_from(["classbanners", "Title", "-W", "1200", "-H", "300"]);
        let config = cli.banner_config(&DefaultsConfig::default()).unwrap();
        assert_eq!(config.width(), 1200);
        assert_eq!(config.height(), 300);
    }

    #[test]
    fn colors() {
        let cli = Cli::parse_from(["classbanners", "Title", "-b", "#FF0000", "-c", "#00FF00"]);
        let config = cli.banner_config(&DefaultsConfig::default()).unwrap();
        assert_eq!(config.background_color().as_str(), "#FF0000");
        assert_eq!(config.text_color().as_str(), "#00FF00");
    }

    #[test]
    fn font_options() {
        let cli = Cli::parse_from(["classbanners", "Title", "-f", "72", "--font", "/path/to/font.ttf"]);
        let config = cli.banner_config(&DefaultsConfig::default()).unwrap();
        assert_eq!(config.font_size(), 72);
        assert_eq!(config.font_path(), Some(Path::new("/path/to/font.ttf")));
    }

    #[test]
    fn style_options() {
        let cli = Cli::parse_from([
            "classbanners",
            "Title",
            "--padding",
            "5",
            "--border-width",
            "3",
            "--border-color",
            "#ABC",
            "-a",
            "left",
            "--format",
            "jpeg",
        ]);
        let defaults = DefaultsConfig::default();
        let config = cli.banner_config(&defaults).unwrap();
        assert_eq!(config.padding(), 5);
        assert_eq!(config.border_width(), 3);
        assert_eq!(config.border_color().as_str(), "#ABC");
        assert_eq!(config.text_align(), TextAlign::Left);
        assert_eq!(cli.format_name(&defaults), Some("jpeg"));
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = Cli::parse_from(["classbanners", "Title", "-W", "-1"]);
        let err = cli.banner_config(&DefaultsConfig::default()).unwrap_err();
        assert_eq!(err.field(), "width");
    }

    #[test]
    fn flags_override_settings_defaults() {
        let defaults = DefaultsConfig {
            width: Some(1000),
            height: Some(250),
            background: Some("#00FF00".into()),
            align: Some(TextAlign::Right),
            output: Some("from-settings.png".into()),
            ..DefaultsConfig::default()
        };
        let cli = Cli::parse_from(["classbanners", "Title", "-W", "640"]);
        let config = cli.banner_config(&defaults).unwrap();
        assert_eq!(config.width(), 640);
        assert_eq!(config.height(), 250);
        assert_eq!(config.background_color().as_str(), "#00FF00");
        assert_eq!(config.text_align(), TextAlign::Right);
        assert_eq!(cli.output_path(&defaults), PathBuf::from("from-settings.png"));
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["classbanners", "-vv", "Title"]);
        assert_eq!(cli.verbosity(), 2);
        let cli = Cli::parse_from(["classbanners", "-q", "Title"]);
        assert_eq!(cli.verbosity(), -1);
        assert!(Cli::try_parse_from(["classbanners", "-v", "-q", "Title"]).is_err());
    }
}
