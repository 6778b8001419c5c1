//! SegClock Hardware Abstraction Layer
//!
//! This crate defines the two collaborators the clock needs from the
//! hardware: a byte-oriented I2C transport and a wall-clock time source.
//! Chip-specific crates implement them; the display driver and refresh
//! loop only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segclock-core / segclock-display       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segclock-hal- │       │ any embedded- │
//! │    rp2040     │       │ hal I2C impl  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C write transport
//! - [`clock::TimeSource`] - Local wall-clock time

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use clock::{TimeSource, WallTime};
pub use i2c::{EmbeddedHalBus, I2cBus, I2cConfig};
