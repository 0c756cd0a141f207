//! Layout arithmetic for the one- or two-line text block.
//!
//! All divisions round towards negative infinity, so oversized text yields
//! negative offsets instead of wrapping or failing.

use crate::params::TextAlign;

/// Vertical gap between title and subtitle, in pixels.
pub const LINE_GAP: i64 = 10;

/// Subtitle font size for a given title size.
#[must_use]
pub fn subtitle_size(font_size: u32) -> u32 {
    font_size / 2
}

/// Top of the title line, vertically centering the whole text block.
#[must_use]
pub fn title_y(height: u32, font_size: u32, has_subtitle: bool) -> i64 {
    let size = i64::from(font_size);
    let block = if has_subtitle { size + i64::from(subtitle_size(font_size)) + LINE_GAP } else { size };
    (i64::from(height) - block).div_euclid(2)
}

/// Top of the subtitle line.
#[must_use]
pub fn subtitle_y(title_y: i64, font_size: u32) -> i64 {
    title_y + i64::from(font_size) + LINE_GAP
}

/// Left edge of a line `text_width` pixels wide.
///
/// Padding only applies to left and right alignment; centering already
/// balances both margins.
#[must_use]
pub fn line_x(align: TextAlign, canvas_width: u32, text_width: i64, padding: u32) -> i64 {
    let width = i64::from(canvas_width);
    let padding = i64::from(padding);
    match align {
        TextAlign::Left => padding,
        TextAlign::Right => width - text_width - padding,
        TextAlign::Center => (width - text_width).div_euclid(2),
    }
}

/// How far the border rectangle sits from each canvas edge.
#[must_use]
pub fn border_inset(border_width: u32) -> i64 {
    i64::from(border_width / 2)
}
