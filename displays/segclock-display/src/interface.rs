//! I2C control-byte framing
//!
//! The SSD1306 expects every I2C write to start with a control byte that
//! says how to interpret what follows. We send exactly one payload byte per
//! write:
//!
//! ```text
//! ┌──────────┬─────────┐
//! │ CONTROL  │ PAYLOAD │
//! │ 0x00/0x40│ 1B      │
//! └──────────┴─────────┘
//! ```

use segclock_hal::I2cBus;

/// Control byte for a command payload
pub const COMMAND_PREFIX: u8 = 0x00;

/// Control byte for a pixel data payload
pub const DATA_PREFIX: u8 = 0x40;

/// How the controller should interpret a payload byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// Controller configuration or addressing
    Command,
    /// Pixel column at the current cursor
    Data,
}

impl FrameKind {
    /// Control byte that precedes payloads of this kind
    pub const fn prefix(self) -> u8 {
        match self {
            FrameKind::Command => COMMAND_PREFIX,
            FrameKind::Data => DATA_PREFIX,
        }
    }

    /// Build the two-byte frame for `byte`
    pub const fn frame(self, byte: u8) -> [u8; 2] {
        [self.prefix(), byte]
    }
}

/// Byte-at-a-time I2C interface to one display
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> I2cInterface<I2C> {
    /// Create an interface bound to `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Send one byte, tagged as data when `is_data` is set
    ///
    /// Errors are returned as-is; nothing is retried.
    pub fn send(&mut self, byte: u8, is_data: bool) -> Result<(), I2C::Error> {
        let kind = if is_data {
            FrameKind::Data
        } else {
            FrameKind::Command
        };
        self.i2c.write(self.address, &kind.frame(byte))
    }

    /// Send a command byte
    pub fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.send(cmd, false)
    }

    /// Send a data byte
    pub fn data(&mut self, byte: u8) -> Result<(), I2C::Error> {
        self.send(byte, true)
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingBus;

    #[test]
    fn test_command_frame() {
        let mut iface = I2cInterface::new(RecordingBus::new(), 0x3C);
        iface.command(0xAE).unwrap();

        let bus = iface.release();
        assert_eq!(bus.writes, vec![(0x3C, vec![0x00, 0xAE])]);
    }

    #[test]
    fn test_data_frame() {
        let mut iface = I2cInterface::new(RecordingBus::new(), 0x3D);
        iface.data(0x7F).unwrap();

        let bus = iface.release();
        assert_eq!(bus.writes, vec![(0x3D, vec![0x40, 0x7F])]);
    }

    #[test]
    fn test_every_byte_is_one_write() {
        let mut iface = I2cInterface::new(RecordingBus::new(), 0x3C);
        for b in 0..=255u8 {
            iface.command(b).unwrap();
            iface.data(b).unwrap();
        }

        let bus = iface.release();
        assert_eq!(bus.writes.len(), 512);
        for (i, (addr, bytes)) in bus.writes.iter().enumerate() {
            let b = (i / 2) as u8;
            let prefix = if i % 2 == 0 { COMMAND_PREFIX } else { DATA_PREFIX };
            assert_eq!(*addr, 0x3C);
            assert_eq!(bytes.as_slice(), &[prefix, b]);
        }
    }

    #[test]
    fn test_error_propagates_without_retry() {
        let mut iface = I2cInterface::new(RecordingBus::failing_after(1), 0x3C);
        iface.command(0xAE).unwrap();
        assert!(iface.data(0x00).is_err());

        // Failed write is not repeated
        let bus = iface.release();
        assert_eq!(bus.attempts, 2);
        assert_eq!(bus.writes.len(), 1);
    }

    #[test]
    fn test_frame_kind_prefix() {
        assert_eq!(FrameKind::Command.frame(0x12), [0x00, 0x12]);
        assert_eq!(FrameKind::Data.frame(0x12), [0x40, 0x12]);
    }
}
