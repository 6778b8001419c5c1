//! Test doubles shared by the driver tests

use segclock_hal::I2cBus;

use crate::interface::{COMMAND_PREFIX, DATA_PREFIX};

/// Bus error raised by [`RecordingBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// I2C bus that records every successful write
pub struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub attempts: usize,
    fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            attempts: 0,
            fail_after: None,
        }
    }

    /// Accept `n` writes, then fail every one after
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new()
        }
    }

    /// Payloads of command frames, in order
    pub fn commands(&self) -> Vec<u8> {
        self.payloads(COMMAND_PREFIX)
    }

    /// Payloads of data frames, in order
    pub fn data(&self) -> Vec<u8> {
        self.payloads(DATA_PREFIX)
    }

    fn payloads(&self, prefix: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == prefix)
            .map(|(_, bytes)| bytes[1])
            .collect()
    }
}

impl I2cBus for RecordingBus {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        if let Some(limit) = self.fail_after {
            if self.writes.len() >= limit {
                return Err(MockError);
            }
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }
}
