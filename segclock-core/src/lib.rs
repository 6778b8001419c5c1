//! Board-agnostic clock logic for SegClock
//!
//! This crate ties the display driver to a time source:
//!
//! - Time-of-day formatting (`HH:MM:SS`)
//! - The refresh loop, exposed one cycle at a time
//! - Clock configuration and error types
//!
//! Nothing here sleeps or touches hardware directly. The firmware owns the
//! delay between cycles.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod refresh;
pub mod time;

pub use config::ClockConfig;
pub use error::ClockError;
pub use refresh::RefreshLoop;
pub use time::{format_hms, TimeText, TIME_TEXT_LEN};
