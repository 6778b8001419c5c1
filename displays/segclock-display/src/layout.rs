//! Horizontal layout of rendered strings

use crate::font::GLYPH_WIDTH;

/// Pixel width of `text` when rendered with the clock font
pub fn text_width(text: &str) -> usize {
    text.chars().count() * GLYPH_WIDTH
}

/// Starting column that centers `text` on a display `width` pixels wide
///
/// Negative when the text is wider than the display. Nothing is clipped.
pub fn centered_column(width: usize, text: &str) -> i32 {
    (width as i32 - text_width(text) as i32) / 2
}
