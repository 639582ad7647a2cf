//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitlog_core` linkage.
//! - Print the frequency table the streak tracker enforces.

use habitlog_core::{Frequency, DAY_MS};

fn main() {
    println!("habitlog_core ping={}", habitlog_core::ping());
    println!("habitlog_core version={}", habitlog_core::core_version());
    for frequency in Frequency::ALL {
        println!(
            "frequency={} cooldown_days={}",
            frequency.label(),
            frequency.cooldown_ms() / DAY_MS
        );
    }
}
