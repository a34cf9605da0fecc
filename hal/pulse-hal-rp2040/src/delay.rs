//! Blocking delay on the embassy time driver
//!
//! `embassy_time::Delay` spins on the timer until the deadline passes, so
//! it blocks the thread of control without needing an executor.

use embassy_time::Delay;
use pulse_hal::eh::EhDelay;

/// Blocking delay backed by the RP2040 timer peripheral
pub type BlockingTimer = EhDelay<Delay>;

/// Create a blocking delay
///
/// Requires `embassy_rp::init` to have run, which starts the time driver.
pub fn blocking_timer() -> BlockingTimer {
    EhDelay::new(Delay)
}
