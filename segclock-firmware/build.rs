//! Build script for segclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Records the build time of day and local UTC offset used to seed an
//!   unset RTC

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    setup_linker();
    record_seed_time();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Export the UTC time of day as SEGCLOCK_SEED_UTC_SECS and the local
/// offset, in minutes, as SEGCLOCK_UTC_OFFSET_MIN
///
/// The offset comes from the SEGCLOCK_UTC_OFFSET environment variable
/// (e.g. `120` or `-300`) and defaults to 0.
fn record_seed_time() {
    println!("cargo:rerun-if-env-changed=SEGCLOCK_UTC_OFFSET");

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() % 86_400)
        .unwrap_or(0);

    let offset_min = match env::var("SEGCLOCK_UTC_OFFSET") {
        Ok(raw) => match raw.trim().parse::<i32>() {
            Ok(min) if (-14 * 60..=14 * 60).contains(&min) => min,
            _ => panic!("SEGCLOCK_UTC_OFFSET must be minutes in -840..=840, got {:?}", raw),
        },
        Err(_) => {
            println!("cargo:warning=SEGCLOCK_UTC_OFFSET not set, clock will be seeded with UTC");
            0
        }
    };

    println!("cargo:rustc-env=SEGCLOCK_SEED_UTC_SECS={}", secs);
    println!("cargo:rustc-env=SEGCLOCK_UTC_OFFSET_MIN={}", offset_min);
}
