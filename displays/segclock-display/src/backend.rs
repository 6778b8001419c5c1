//! Display backend trait
//!
//! Defines the operations the refresh loop drives each cycle.

use crate::layout::centered_column;

/// A display that can draw strings of large glyphs
///
/// Implemented by [`Ssd1306`](crate::Ssd1306). The refresh loop only talks
/// to this trait, so tests can substitute a recording display.
pub trait GlyphDisplay {
    /// Error type for display operations
    type Error;

    /// Send the controller power-up sequence
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Erase every pixel
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw `text` starting at pixel column `x` on `page`
    ///
    /// - `x`: Starting column; may be negative, nothing is clipped
    /// - `page`: 8-pixel strip (0-based)
    /// - `text`: Characters to draw
    fn render_string(&mut self, x: i32, page: u8, text: &str) -> Result<(), Self::Error>;

    /// Width of the panel in pixels
    fn width(&self) -> usize;

    /// Starting column that centers `text` on this display
    fn centered_x(&self, text: &str) -> i32 {
        centered_column(self.width(), text)
    }
}

impl<T: GlyphDisplay + ?Sized> GlyphDisplay for &mut T {
    type Error = T::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        T::initialize(self)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        T::clear(self)
    }

    fn render_string(&mut self, x: i32, page: u8, text: &str) -> Result<(), Self::Error> {
        T::render_string(self, x, page, text)
    }

    fn width(&self) -> usize {
        T::width(self)
    }
}
