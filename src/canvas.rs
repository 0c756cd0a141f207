//! The raster canvas a banner is drawn onto.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use image::{DynamicImage, Rgb, RgbImage};

/// Opaque RGB pixel buffer. Ink is always opaque; only glyph coverage
/// blends with what is underneath.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocate a `width` × `height` canvas filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self { pixels: RgbImage::from_pixel(width, height, background) }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Paint `color` into the pixel at (`x`, `y`) with `coverage` (0..=1).
    ///
    /// Coordinates outside the canvas are ignored.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let pixel = self.pixels.get_pixel_mut(x, y);
        if alpha >= 1.0 {
            *pixel = color;
            return;
        }
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let mixed = f32::from(src) * alpha + f32::from(*dst) * (1.0 - alpha);
            *dst = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Stroke the outline of the rectangle spanning (`inset`, `inset`) to
    /// (`width - inset`, `height - inset`), inclusive.
    ///
    /// The stroke grows inwards from those bounds. Overlapping or inverted
    /// bounds are drawn as-is.
    pub fn stroke_rect(&mut self, inset: i64, stroke_width: u32, color: Rgb<u8>) {
        let far_x = i64::from(self.width()) - inset;
        let far_y = i64::from(self.height()) - inset;
        let outline = Rectangle::with_corners(
            Point::new(saturate(inset), saturate(inset)),
            Point::new(saturate(far_x), saturate(far_y)),
        );
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(BinaryColor::On)
            .stroke_width(stroke_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        log::trace!("Stroking border {outline:?} with width {stroke_width}");
        if let Err(never) = outline.into_styled(style).draw(&mut self.pen(color)) {
            match never {}
        }
    }

    /// A draw target that paints `color` wherever `embedded-graphics`
    /// emits an "on" pixel.
    pub fn pen(&mut self, color: Rgb<u8>) -> Pen<'_> {
        Pen { canvas: self, color }
    }

    /// Read a pixel, if in bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Finish drawing and hand over the image.
    #[must_use]
    pub fn into_image(self) -> DynamicImage {
        DynamicImage::ImageRgb8(self.pixels)
    }
}

/// Clamp a layout coordinate into the range `embedded-graphics` works in.
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Single-color `embedded-graphics` draw target over a [`Canvas`].
pub struct Pen<'c> {
    canvas: &'c mut Canvas,
    color: Rgb<u8>,
}

impl DrawTarget for Pen<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if color.is_on() {
                self.canvas.blend_pixel(x.into(), y.into(), self.color, 1.0);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Pen<'_> {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgb<u8> = Rgb([0x4A, 0x90, 0xD9]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn new_fills_background() {
        let canvas = Canvas::new(10, 5, BLUE);
        assert_eq!((canvas.width(), canvas.height()), (10, 5));
        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
        assert_eq!(canvas.pixel(9, 4), Some(BLUE));
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn full_coverage_replaces() {
        let mut canvas = Canvas::new(4, 4, BLUE);
        canvas.blend_pixel(1, 2, Rgb([255, 0, 0]), 1.0);
        assert_eq!(canvas.pixel(1, 2), Some(Rgb([255, 0, 0])));
    }

    #[test]
    fn half_coverage_mixes() {
        let mut canvas = Canvas::new(1, 1, Rgb([0, 0, 0]));
        canvas.blend_pixel(0, 0, Rgb([255, 255, 255]), 0.5);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb([128, 128, 128])));
    }

    #[test]
    fn zero_coverage_leaves_pixel() {
        let mut canvas = Canvas::new(1, 1, BLUE);
        canvas.blend_pixel(0, 0, BLACK, 0.0);
        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
    }

    #[test]
    fn blend_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(2, 2, BLUE);
        canvas.blend_pixel(-1, 0, BLACK, 1.0);
        canvas.blend_pixel(0, 2, BLACK, 1.0);
        canvas.blend_pixel(i64::MAX, i64::MIN, BLACK, 1.0);
        assert!(canvas.clone().into_image().to_rgb8().pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn stroke_rect_draws_inside_inset() {
        let mut canvas = Canvas::new(40, 20, BLUE);
        canvas.stroke_rect(2, 4, BLACK);

        // Outside the inset stays background.
        assert_eq!(canvas.pixel(0, 10), Some(BLUE));
        assert_eq!(canvas.pixel(1, 10), Some(BLUE));
        // The stroke covers four pixels inwards from x = 2.
        for x in 2..6 {
            assert_eq!(canvas.pixel(x, 10), Some(Rgb([0, 0, 0])), "x = {x}");
        }
        assert_eq!(canvas.pixel(6, 10), Some(BLUE));
        // Top edge.
        assert_eq!(canvas.pixel(20, 3), Some(Rgb([0, 0, 0])));
        // Interior untouched.
        assert_eq!(canvas.pixel(20, 10), Some(BLUE));
    }

    #[test]
    fn oversized_stroke_does_not_panic() {
        let mut canvas = Canvas::new(10, 10, BLUE);
        canvas.stroke_rect(50, 100, BLACK);
        assert_eq!((canvas.width(), canvas.height()), (10, 10));
    }

    #[test]
    fn saturate_clamps() {
        assert_eq!(saturate(5), 5);
        assert_eq!(saturate(i64::MAX), i32::MAX);
        assert_eq!(saturate(i64::MIN), i32::MIN);
    }
}
