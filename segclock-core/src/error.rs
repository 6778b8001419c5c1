//! Refresh loop errors

use segclock_hal::WallTime;

/// Errors surfaced by the refresh loop
///
/// `D` is the display error type, `T` the time source error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError<D, T> {
    /// Display did not accept the startup sequence; fatal
    Open(D),
    /// A write failed mid-frame; the frame is abandoned
    Write(D),
    /// Time source could not produce a reading
    Time(T),
    /// Time source returned fields outside a 24-hour day
    InvalidTime(WallTime),
    /// Page is off the panel or the refresh interval is zero; fatal
    InvalidConfig,
}

impl<D, T> ClockError<D, T> {
    /// Whether the clock cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClockError::Open(_) | ClockError::InvalidConfig)
    }
}
