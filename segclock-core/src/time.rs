//! Time-of-day formatting

use core::fmt::Write;

use heapless::String;
use segclock_hal::WallTime;

/// Length of `HH:MM:SS`
pub const TIME_TEXT_LEN: usize = 8;

/// Formatted time of day
pub type TimeText = String<TIME_TEXT_LEN>;

/// Format `time` as zero-padded `HH:MM:SS`
///
/// Returns `None` when a field is out of range.
pub fn format_hms(time: WallTime) -> Option<TimeText> {
    WallTime::new(time.hour, time.minute, time.second)?;

    let mut text = TimeText::new();
    write!(
        text,
        "{:02}:{:02}:{:02}",
        time.hour, time.minute, time.second
    )
    .ok()?;
    Some(text)
}
