//! Measuring and drawing single lines of text.

use std::collections::BTreeSet;
use std::fmt;

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use image::Rgb;
use rusttype::{point, Font, GlyphId, Scale};

use crate::canvas::{saturate, Canvas};

/// A loaded font face, not yet bound to a size.
#[derive(Clone)]
pub enum Typeface {
    /// A TrueType/OpenType font that can be drawn at any size.
    Scalable(Font<'static>),
    /// A fixed-size bitmap glyph set compiled into the binary.
    Fixed(&'static MonoFont<'static>),
}

impl Typeface {
    /// The built-in fixed glyph set used when no scalable font is available.
    #[must_use]
    pub fn builtin() -> Self {
        Self::Fixed(&FONT_10X20)
    }

    /// Parse a scalable font from raw file contents.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(bytes).map(Self::Scalable)
    }

    /// Bind this face to a size.
    #[must_use]
    pub fn at_size(&self, size: u32) -> SizedFont {
        SizedFont { face: self.clone(), size }
    }

    /// Whether the face honours the requested size.
    #[must_use]
    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Scalable(_))
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalable(font) => write!(f, "Typeface::Scalable({} glyphs)", font.glyph_count()),
            Self::Fixed(font) => write!(f, "Typeface::Fixed({:?})", font.character_size),
        }
    }
}

/// A typeface at a particular size: what the renderer measures and draws with.
#[derive(Debug, Clone)]
pub struct SizedFont {
    face: Typeface,
    size: u32,
}

impl SizedFont {
    /// The requested size (ignored by fixed faces).
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Rendered width of `text` in whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn text_width(&self, text: &str) -> i64 {
        match &self.face {
            Typeface::Scalable(font) => {
                // Width is where the caret ends up after the last glyph.
                let extent = font
                    .layout(text, em_scale(font, self.size), point(0.0, 0.0))
                    .last()
                    .map_or(0.0, |g| g.position().x + g.unpositioned().h_metrics().advance_width);
                extent.max(0.0).ceil() as i64
            }
            Typeface::Fixed(font) => {
                let count = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
                let advance = i64::from(font.character_size.width + font.character_spacing);
                (count.saturating_mul(advance) - i64::from(font.character_spacing)).max(0)
            }
        }
    }

    /// Draw `text` with its top-left at (`x`, `y`).
    ///
    /// Text that runs past the canvas edges is clipped, not wrapped.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: i64, y: i64, color: Rgb<u8>) {
        match &self.face {
            Typeface::Scalable(font) => {
                check_glyphs(font, text);
                let scale = em_scale(font, self.size);
                let ascent = font.v_metrics(scale).ascent;
                let origin = point(x as f32, y as f32 + ascent);
                for glyph in font.layout(text, scale, origin) {
                    let Some(bbox) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = i64::from(bbox.min.x) + i64::from(gx);
                        let py = i64::from(bbox.min.y) + i64::from(gy);
                        canvas.blend_pixel(px, py, color, coverage);
                    });
                }
            }
            Typeface::Fixed(font) => {
                let style = MonoTextStyle::new(*font, BinaryColor::On);
                let position = Point::new(saturate(x), saturate(y));
                let line = Text::with_baseline(text, position, style, Baseline::Top);
                if let Err(never) = line.draw(&mut canvas.pen(color)) {
                    match never {}
                }
            }
        }
    }
}

/// Scale that makes one em `size` pixels tall.
///
/// `rusttype` scales by ascent-to-descent height, so convert from em units.
#[allow(clippy::cast_precision_loss)]
fn em_scale(font: &Font<'_>, size: u32) -> Scale {
    let size = size as f32;
    let units_per_em = f32::from(font.units_per_em());
    let metrics = font.v_metrics_unscaled();
    let height = metrics.ascent - metrics.descent;
    if units_per_em <= 0.0 || height <= 0.0 {
        return Scale::uniform(size);
    }
    Scale::uniform(size * height / units_per_em)
}

/// Codepoints in `text`, whitespace aside, that `font` has no glyph for.
fn missing_glyphs(font: &Font<'_>, text: &str) -> BTreeSet<u32> {
    text.chars()
        .filter(|c| !c.is_whitespace() && font.glyph(*c).id() == GlyphId(0))
        .map(u32::from)
        .collect()
}

/// Warn about characters the font has no glyph for.
fn check_glyphs(font: &Font<'_>, text: &str) {
    let missing = missing_glyphs(font, text);
    if !missing.is_empty() {
        log::warn!(
            "Missing glyphs for {} codepoint(s): {}",
            missing.len(),
            missing.iter().map(|c| format!("{c:#x}")).collect::<Vec<_>>().join(", ")
        );
    }
}
