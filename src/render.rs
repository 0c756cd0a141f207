//! Banner rendering: background, border, then one or two lines of text.

use std::sync::Arc;

use crate::canvas::Canvas;
use crate::fonts::FontResolver;
use crate::layout;
use crate::model::{Banner, BannerConfig};
use crate::text::SizedFont;

/// Renders banners, filling in a default config for banners created through
/// [`BannerGenerator::create_banner`].
#[derive(Debug, Clone, Default)]
pub struct BannerGenerator {
    default_config: Arc<BannerConfig>,
    fonts: FontResolver,
}

impl BannerGenerator {
    /// Generator whose [`create_banner`](Self::create_banner) uses `config`.
    #[must_use]
    pub fn new(config: impl Into<Arc<BannerConfig>>) -> Self {
        Self { default_config: config.into(), fonts: FontResolver::default() }
    }

    /// Use `fonts` to resolve typefaces.
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontResolver) -> Self {
        self.fonts = fonts;
        self
    }

    /// Config given to banners created without one.
    #[must_use]
    pub fn default_config(&self) -> &Arc<BannerConfig> {
        &self.default_config
    }

    /// Render `banner` with its own config and attach the image.
    ///
    /// Any previous image is replaced, never drawn over.
    pub fn generate<'b>(&self, banner: &'b mut Banner) -> &'b mut Banner {
        let config = Arc::clone(&banner.config);
        log::debug!(
            "Rendering {}x{} banner {:?} (subtitle: {:?})",
            config.width(),
            config.height(),
            banner.title,
            banner.subtitle
        );

        let mut canvas = Canvas::new(config.width(), config.height(), config.background_color().rgb());

        if config.border_width() > 0 {
            canvas.stroke_rect(
                layout::border_inset(config.border_width()),
                config.border_width(),
                config.border_color().rgb(),
            );
        }

        let face = self.fonts.resolve(config.font_path());
        let title_font = face.at_size(config.font_size());
        let subtitle_font = face.at_size(layout::subtitle_size(config.font_size()));

        let title_y = layout::title_y(config.height(), config.font_size(), banner.has_subtitle());
        draw_line(&mut canvas, &config, &banner.title, &title_font, title_y);

        if banner.has_subtitle() {
            let subtitle_y = layout::subtitle_y(title_y, config.font_size());
            draw_line(&mut canvas, &config, &banner.subtitle, &subtitle_font, subtitle_y);
        }

        banner.image = Some(canvas.into_image());
        banner
    }

    /// Create a banner and render it in one step.
    ///
    /// Uses the generator's default config unless `config` is given.
    pub fn create_banner(
        &self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        config: Option<Arc<BannerConfig>>,
    ) -> Banner {
        let mut banner = Banner::new(title)
            .with_subtitle(subtitle)
            .with_config(config.unwrap_or_else(|| Arc::clone(&self.default_config)));
        self.generate(&mut banner);
        banner
    }
}

/// Render `banner` with the default font lookup.
pub fn render(banner: &mut Banner) -> &mut Banner {
    BannerGenerator::default().generate(banner)
}

/// Place one line horizontally by alignment and draw it at `y`.
fn draw_line(canvas: &mut Canvas, config: &BannerConfig, text: &str, font: &SizedFont, y: i64) {
    let text_width = font.text_width(text);
    let x = layout::line_x(config.text_align(), config.width(), text_width, config.padding());
    log::trace!("Drawing {text:?} ({text_width}px wide, size {}) at ({x}, {y})", font.size());
    font.draw(canvas, text, x, y, config.text_color().rgb());
}
