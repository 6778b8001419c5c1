//! SSD1306 OLED Display Driver
//!
//! Driver for 128x32 SSD1306-based OLED displays via I2C.
//! There is no frame buffer: every call streams straight to display RAM,
//! one byte per bus write.

use segclock_hal::I2cBus;

use crate::backend::GlyphDisplay;
use crate::cmd::{self, op};
use crate::font;
use crate::interface::I2cInterface;

/// SSD1306 I2C address (0x3C, or 0x3D with SA0 high)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 32;
pub const PAGES: usize = HEIGHT / 8;

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Contrast level sent during init (0x00 dim - 0xFF bright)
    pub contrast: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: SSD1306_ADDR,
            contrast: 0x8F, // Mid-level brightness
        }
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    iface: I2cInterface<I2C>,
    config: DisplayConfig,
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    ///
    /// Nothing is sent until [`initialize`](Self::initialize).
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        Self {
            iface: I2cInterface::new(i2c, config.address),
            config,
        }
    }

    /// Initialize the display
    ///
    /// Safe to call again; it always emits the same sequence.
    pub fn initialize(&mut self) -> Result<(), I2C::Error> {
        for c in cmd::init_sequence(self.config.contrast) {
            self.iface.command(c)?;
        }
        Ok(())
    }

    /// Move the RAM pointer to `column` (0-127) on `page` (0-3)
    ///
    /// Out-of-range values are not checked; the controller decides what
    /// they mean.
    pub fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), I2C::Error> {
        self.iface.command(cmd::page_addr(page))?;
        self.iface.command(cmd::low_column(column))?;
        self.iface.command(cmd::high_column(column))
    }

    /// Blank every page
    pub fn clear(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES as u8 {
            self.set_cursor(0, page)?;
            for _ in 0..WIDTH {
                self.iface.data(0x00)?;
            }
        }
        Ok(())
    }

    /// Write one glyph at the current cursor
    pub fn draw_glyph(&mut self, ch: char) -> Result<(), I2C::Error> {
        for &column in font::glyph(ch) {
            self.iface.data(column)?;
        }
        Ok(())
    }

    /// Draw `text` starting at column `x` on `page`
    ///
    /// Glyphs are streamed back-to-back; the column pointer advances on its
    /// own in horizontal addressing mode. `x` is sent as its low eight bits,
    /// so the caller must keep the text on screen.
    pub fn render_string(&mut self, x: i32, page: u8, text: &str) -> Result<(), I2C::Error> {
        self.set_cursor(x as u8, page)?;
        for ch in text.chars() {
            self.draw_glyph(ch)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.iface.command(op::SET_CONTRAST)?;
        self.iface.command(contrast)?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.iface.command(op::DISPLAY_ON)
        } else {
            self.iface.command(op::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        if inverted {
            self.iface.command(op::SET_INVERSE)
        } else {
            self.iface.command(op::SET_NORMAL)
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.iface.release()
    }
}

impl<I2C: I2cBus> GlyphDisplay for Ssd1306<I2C> {
    type Error = I2C::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        Ssd1306::initialize(self)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ssd1306::clear(self)
    }

    fn render_string(&mut self, x: i32, page: u8, text: &str) -> Result<(), Self::Error> {
        Ssd1306::render_string(self, x, page, text)
    }

    fn width(&self) -> usize {
        WIDTH
    }
}
