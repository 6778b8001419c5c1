//! Clock refresh loop
//!
//! Each cycle samples the time, blanks the panel and redraws the whole
//! string centered on the configured page. There is no partial redraw, so
//! a cycle that fails halfway is repaired by the next one.

use segclock_display::GlyphDisplay;
use segclock_hal::TimeSource;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::time::{format_hms, TimeText};

/// Refresh loop driving one display from one time source
pub struct RefreshLoop<D, T> {
    display: D,
    time: T,
    config: ClockConfig,
    /// Cycles completed since creation
    frames: u32,
}

impl<D: GlyphDisplay, T: TimeSource> RefreshLoop<D, T> {
    /// Create a refresh loop owning `display` and `time`
    pub fn new(display: D, time: T, config: ClockConfig) -> Self {
        Self {
            display,
            time,
            config,
            frames: 0,
        }
    }

    /// Bring the panel up: power-up sequence, then a blank screen
    ///
    /// A configuration that could never draw is rejected before the bus is
    /// touched. Any bus failure means the display is unreachable and is
    /// reported as [`ClockError::Open`].
    pub fn start(&mut self) -> Result<(), ClockError<D::Error, T::Error>> {
        if !self.config.is_valid() {
            return Err(ClockError::InvalidConfig);
        }
        self.display.initialize().map_err(ClockError::Open)?;
        self.display.clear().map_err(ClockError::Open)?;
        Ok(())
    }

    /// Run one refresh cycle and return the text that was drawn
    pub fn run_cycle(&mut self) -> Result<TimeText, ClockError<D::Error, T::Error>> {
        let now = self.time.now_local().map_err(ClockError::Time)?;
        let text = format_hms(now).ok_or(ClockError::InvalidTime(now))?;
        let x = self.display.centered_x(&text);

        self.display.clear().map_err(ClockError::Write)?;
        self.display
            .render_string(x, self.config.page, &text)
            .map_err(ClockError::Write)?;

        self.frames = self.frames.wrapping_add(1);
        #[cfg(feature = "defmt")]
        defmt::trace!("frame {}: {} at x={}", self.frames, text.as_str(), x);

        Ok(text)
    }

    /// Delay the caller should wait between cycles
    pub fn refresh_interval_ms(&self) -> u32 {
        self.config.refresh_interval_ms
    }

    /// Number of cycles that completed successfully
    pub fn frames_drawn(&self) -> u32 {
        self.frames
    }

    /// Current configuration
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Tear down and give back the collaborators
    pub fn release(self) -> (D, T) {
        (self.display, self.time)
    }
}
