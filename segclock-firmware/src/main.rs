//! SegClock - OLED Clock Firmware
//!
//! Main firmware binary for an RP2040 board driving a 128x32 SSD1306 OLED.
//! Shows the RTC time as `HH:MM:SS` in large digits, redrawn twice a second.
//!
//! Wiring: I2C1 with SDA on GPIO2 and SCL on GPIO3.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::I2c;
use embassy_rp::rtc::Rtc;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use segclock_core::{ClockConfig, RefreshLoop};
use segclock_display::{DisplayConfig, Ssd1306};
use segclock_hal_rp2040::i2c::rp_config;
use segclock_hal_rp2040::{I2cConfig, RpI2cBus, RpRtc, WallTime};

/// Build time of day shifted to local time, used when the RTC comes up unset
///
/// The build machine's clock is read as UTC and shifted by the offset given
/// in SEGCLOCK_UTC_OFFSET at build time. Without it the display shows UTC,
/// late by however long flashing took.
fn seed_time() -> WallTime {
    let utc_secs = env!("SEGCLOCK_SEED_UTC_SECS").parse::<u32>().unwrap_or(0);
    let offset_min = env!("SEGCLOCK_UTC_OFFSET_MIN").parse::<i32>().unwrap_or(0);
    WallTime::from_seconds_of_day(utc_secs).offset_by(offset_min * 60)
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SegClock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // I2C1: GPIO3 = SCL, GPIO2 = SDA
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, rp_config(I2cConfig::FAST));
    let bus = RpI2cBus::new(i2c);

    let rtc = match RpRtc::new(Rtc::new(p.RTC), seed_time()) {
        Ok((rtc, seeded)) => {
            if seeded {
                warn!("RTC was not running, seeded from build time");
            }
            rtc
        }
        Err(e) => defmt::panic!("RTC setup failed: {:?}", e),
    };

    let display_config = DisplayConfig::default();
    let clock_config = ClockConfig::default();
    info!(
        "Display at 0x{:02x}, page {}, refresh {}ms",
        display_config.address, clock_config.page, clock_config.refresh_interval_ms
    );

    let display = Ssd1306::new(bus, display_config);
    let mut clock = RefreshLoop::new(display, rtc, clock_config);

    // Unreachable display is fatal: nothing is drawn
    if let Err(e) = clock.start() {
        defmt::panic!("OLED initialization failed: {:?}", e);
    }
    info!("OLED initialized");

    let interval = Duration::from_millis(clock.refresh_interval_ms() as u64);
    loop {
        match clock.run_cycle() {
            Ok(text) => trace!("Drew {}", text.as_str()),
            // Frame abandoned; the next cycle redraws everything
            Err(e) => warn!("Refresh failed: {:?}", e),
        }
        Timer::after(interval).await;
    }
}
