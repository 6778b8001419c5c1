//! Wall-clock time source

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Local time of day, second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl WallTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a time of day, rejecting out-of-range fields
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    /// Seconds elapsed since midnight
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Time of day `secs` seconds after midnight, wrapping past a day
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// Shift by `offset_secs` (e.g. a UTC offset), wrapping around midnight
    pub const fn offset_by(&self, offset_secs: i32) -> Self {
        let secs = (self.seconds_of_day() as i64 + offset_secs as i64)
            .rem_euclid(SECONDS_PER_DAY as i64);
        Self::from_seconds_of_day(secs as u32)
    }
}

/// Source of the current local time
///
/// Implemented by RTC peripherals or, on a host, the system clock.
pub trait TimeSource {
    /// Error type when no time can be produced (e.g. RTC not running)
    type Error;

    /// Read the current local time of day
    fn now_local(&mut self) -> Result<WallTime, Self::Error>;
}

impl<T: TimeSource + ?Sized> TimeSource for &mut T {
    type Error = T::Error;

    fn now_local(&mut self) -> Result<WallTime, Self::Error> {
        T::now_local(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(WallTime::new(24, 0, 0).is_none());
        assert!(WallTime::new(0, 60, 0).is_none());
        assert!(WallTime::new(0, 0, 60).is_none());
        assert_eq!(WallTime::new(0, 0, 0), Some(WallTime::MIDNIGHT));
    }

    #[test]
    fn test_seconds_of_day() {
        let t = WallTime::new(7, 5, 9).unwrap();
        assert_eq!(t.seconds_of_day(), 7 * 3600 + 5 * 60 + 9);
        assert_eq!(WallTime::new(23, 59, 59).unwrap().seconds_of_day(), 86_399);
    }

    #[test]
    fn test_from_seconds_wraps_past_midnight() {
        assert_eq!(
            WallTime::from_seconds_of_day(7 * 3600 + 5 * 60 + 9),
            WallTime::new(7, 5, 9).unwrap()
        );
        assert_eq!(WallTime::from_seconds_of_day(SECONDS_PER_DAY), WallTime::MIDNIGHT);
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let utc = WallTime::new(23, 30, 0).unwrap();
        // UTC+2
        assert_eq!(utc.offset_by(2 * 3600), WallTime::new(1, 30, 0).unwrap());

        let utc = WallTime::new(0, 15, 0).unwrap();
        // UTC-5
        assert_eq!(utc.offset_by(-5 * 3600), WallTime::new(19, 15, 0).unwrap());
        assert_eq!(utc.offset_by(0), utc);
    }

    proptest! {
        #[test]
        fn prop_valid_fields_accepted(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let t = WallTime::new(h, m, s).unwrap();
            prop_assert_eq!((t.hour, t.minute, t.second), (h, m, s));
        }

        #[test]
        fn prop_ordering_matches_seconds(a in 0u32..86_400, b in 0u32..86_400) {
            let ta = WallTime::new((a / 3600) as u8, (a / 60 % 60) as u8, (a % 60) as u8).unwrap();
            let tb = WallTime::new((b / 3600) as u8, (b / 60 % 60) as u8, (b % 60) as u8).unwrap();
            prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
        }

        #[test]
        fn prop_offset_round_trips(secs in 0u32..86_400, offset in -50_400i32..50_400) {
            let t = WallTime::from_seconds_of_day(secs);
            prop_assert_eq!(t.offset_by(offset).offset_by(-offset), t);
        }
    }
}
