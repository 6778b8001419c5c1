//! RP2040-specific HAL for the SegClock clock
//!
//! This crate provides RP2040 implementations of the shared
//! `segclock-hal` traits:
//!
//! - Blocking I2C transport (implements `segclock_hal::I2cBus`)
//! - RTC-backed wall clock (implements `segclock_hal::TimeSource`)

#![no_std]

pub mod i2c;
pub mod rtc;

// Re-export shared traits from segclock-hal for convenience
pub use segclock_hal::{I2cBus, I2cConfig, TimeSource, WallTime};

pub use i2c::{I2cBusError, RpI2cBus};
pub use rtc::{RpRtc, RtcClockError};
