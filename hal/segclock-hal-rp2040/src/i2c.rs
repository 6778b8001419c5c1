//! I2C bus driver for RP2040
//!
//! Wraps a blocking embassy-rp I2C master so the display driver can use it
//! through `segclock_hal::I2cBus`.

use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance};
use segclock_hal::{I2cBus, I2cConfig};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Address or data byte not acknowledged
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Address outside the 7-bit range or reserved
    InvalidAddress,
    /// Other error
    Other,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::AddressOutOfRange(_) | i2c::Error::AddressReserved(_) => {
                I2cBusError::InvalidAddress
            }
            _ => I2cBusError::Other,
        }
    }
}

/// Translate the shared bus settings into an embassy-rp config
pub fn rp_config(config: I2cConfig) -> i2c::Config {
    let mut rp = i2c::Config::default();
    rp.frequency = config.frequency;
    rp
}

/// Blocking RP2040 I2C master
pub struct RpI2cBus<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> RpI2cBus<'d, T> {
    /// Wrap a blocking I2C master
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self { i2c }
    }
}

impl<'d, T: Instance> I2cBus for RpI2cBus<'d, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.blocking_write(address, data).map_err(I2cBusError::from)
    }
}
