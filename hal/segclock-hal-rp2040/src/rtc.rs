//! RTC-backed wall clock for RP2040
//!
//! The RP2040 RTC loses its time on power-down, so it is seeded once at
//! boot when it is not already running.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc, RtcError};
use segclock_hal::{TimeSource, WallTime};

/// Errors reading the RTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcClockError {
    /// RTC has not been started
    NotRunning,
    /// RTC rejected or returned an invalid date/time
    InvalidDateTime,
}

impl From<RtcError> for RtcClockError {
    fn from(e: RtcError) -> Self {
        match e {
            RtcError::NotRunning => RtcClockError::NotRunning,
            _ => RtcClockError::InvalidDateTime,
        }
    }
}

/// Time source backed by the on-chip RTC
pub struct RpRtc<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> RpRtc<'d> {
    /// Wrap the RTC, starting it at `seed` if it is not running
    ///
    /// Returns `true` if the RTC had to be seeded.
    pub fn new(mut rtc: Rtc<'d, RTC>, seed: WallTime) -> Result<(Self, bool), RtcClockError> {
        let seeded = !rtc.is_running();
        if seeded {
            rtc.set_datetime(DateTime {
                year: 2024,
                month: 1,
                day: 1,
                day_of_week: DayOfWeek::Monday,
                hour: seed.hour,
                minute: seed.minute,
                second: seed.second,
            })?;
        }
        Ok((Self { rtc }, seeded))
    }
}

impl<'d> TimeSource for RpRtc<'d> {
    type Error = RtcClockError;

    fn now_local(&mut self) -> Result<WallTime, Self::Error> {
        let now = self.rtc.now()?;
        WallTime::new(now.hour, now.minute, now.second).ok_or(RtcClockError::InvalidDateTime)
    }
}
