//! SSD1306 display driver and large-digit renderer for SegClock
//!
//! This crate provides:
//! - A fixed 6x10 digit font ([`font`]) covering `0`-`9` and `:`
//! - The I2C control-byte framing for command and data bytes ([`interface`])
//! - The SSD1306 driver: init sequence, page/column addressing, clearing and
//!   string rendering ([`ssd1306`])
//! - The `GlyphDisplay` trait used by the refresh loop ([`backend`])
//!
//! # Architecture
//!
//! ```text
//! render_string ──► set_cursor ──► command()/data() ──► I2cBus::write
//!       ▲
//!  font::glyph
//! ```
//!
//! Every byte goes out as its own two-byte bus write: a control prefix
//! (`0x00` command, `0x40` data) followed by the payload byte. Glyphs are
//! streamed back-to-back and rely on the controller's horizontal addressing
//! mode to advance the column pointer.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod cmd;
pub mod font;
pub mod interface;
pub mod layout;
pub mod ssd1306;

#[cfg(test)]
mod mock;

// Re-export key types
pub use backend::GlyphDisplay;
pub use font::{glyph, is_supported, Glyph, GLYPH_WIDTH};
pub use interface::{FrameKind, I2cInterface};
pub use layout::{centered_column, text_width};
pub use ssd1306::{DisplayConfig, Ssd1306, HEIGHT, PAGES, WIDTH};
