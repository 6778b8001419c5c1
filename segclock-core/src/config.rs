//! Clock configuration

use segclock_display::PAGES;

/// Refresh loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Page the time is drawn on (0-3)
    pub page: u8,
    /// Delay between cycles in milliseconds
    pub refresh_interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            page: 1,
            refresh_interval_ms: 500,
        }
    }
}

impl ClockConfig {
    /// Check the page lies on the panel and the interval is non-zero
    pub fn is_valid(&self) -> bool {
        (self.page as usize) < PAGES && self.refresh_interval_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClockConfig::default();
        assert_eq!(config.page, 1);
        assert_eq!(config.refresh_interval_ms, 500);
        assert!(config.is_valid());
    }

    #[test]
    fn test_validation() {
        let off_panel = ClockConfig {
            page: 4,
            ..Default::default()
        };
        assert!(!off_panel.is_valid());

        let no_delay = ClockConfig {
            refresh_interval_ms: 0,
            ..Default::default()
        };
        assert!(!no_delay.is_valid());
    }
}
