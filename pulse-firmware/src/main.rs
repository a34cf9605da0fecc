//! Pulse - LED blink firmware
//!
//! Binds one output pin by name, then toggles it forever with a blocking
//! delay in between. There is no executor and nothing else runs; a reset or
//! power cycle is the only way out of the loop.
//!
//! On the Pico W (`board-pico-w`) the on-board LED is wired to the CYW43439
//! radio and needs its async driver, so this firmware blinks an external LED
//! on GP15 instead.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use pulse_core::DigitalOutputController;
use pulse_hal_rp2040::{blocking_timer, PinBank};

use crate::config::{BLINK, BOARD};

mod config;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Pulse firmware starting on {}", BOARD.name);

    // Initialize RP2040 peripherals (also starts the time driver)
    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);

    let resolved = unwrap!(BLINK.validate(&BOARD));
    info!("Pin '{}' resolves to {}", BLINK.pin, resolved);

    // Acquisition is the only failure point; there is no recovery short of
    // a reset, so log and halt
    let mut led = unwrap!(DigitalOutputController::acquire(
        &mut bank,
        &BOARD,
        BLINK.pin,
        blocking_timer(),
    ));

    info!(
        "Blinking {} every {} ms",
        BLINK.pin,
        BLINK.period.as_millis() as u64
    );

    led.run_blink(BLINK.period)
}
