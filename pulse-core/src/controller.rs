//! Timed digital output controller
//!
//! Owns one output pin and one blocking delay. The controller keeps the
//! logical state of the output; the physical line follows it, inverted for
//! active-low pins.

use core::time::Duration;

use pulse_hal::{BlockingDelay, OutputPin};

use crate::board::{BoardProfile, PinIdentifier};
use crate::error::HardwareBindingError;
use crate::provider::PinProvider;

/// Drives one output pin through a deterministic sequence of levels
pub struct DigitalOutputController<P, D> {
    pin: P,
    delay: D,
    identifier: Option<PinIdentifier>,
    /// If true, logical ON = pin LOW
    active_low: bool,
    /// Current logical state
    state: bool,
}

impl<P: OutputPin, D: BlockingDelay> DigitalOutputController<P, D> {
    /// Bind to a pin by identifier and configure it as output
    ///
    /// The identifier is resolved against `board`, then claimed from
    /// `provider` with the output initially off. On error nothing is left
    /// claimed and `delay` is dropped.
    pub fn acquire<V>(
        provider: &mut V,
        board: &BoardProfile,
        identifier: &str,
        delay: D,
    ) -> Result<Self, HardwareBindingError>
    where
        V: PinProvider<Pin = P>,
    {
        let id = PinIdentifier::parse(identifier)?;
        let resolved = board.resolve(&id)?;
        // Logical off is a high line when active-low
        let pin = provider.claim_output(resolved.line, resolved.active_low)?;

        Ok(Self {
            pin,
            delay,
            identifier: Some(id),
            active_low: resolved.active_low,
            state: false,
        })
    }

    /// Wrap a pin that is already configured as output
    ///
    /// The logical state is read back from the pin's current level.
    pub fn new(pin: P, delay: D, active_low: bool) -> Self {
        let state = pin.is_set_high() != active_low;
        Self {
            pin,
            delay,
            identifier: None,
            active_low,
            state,
        }
    }

    /// Drive the output to a logical level
    pub fn set(&mut self, state: bool) {
        self.state = state;
        self.pin.set_state(state != self.active_low);
    }

    /// Flip the logical level
    pub fn toggle(&mut self) {
        self.state = !self.state;
        self.pin.toggle();
    }

    /// Current logical level
    pub fn state(&self) -> bool {
        self.state
    }

    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    /// Identifier the pin was acquired with, if any
    pub fn identifier(&self) -> Option<&PinIdentifier> {
        self.identifier.as_ref()
    }

    /// Toggle, then block for `period`
    pub fn step(&mut self, period: Duration) {
        self.toggle();
        self.delay.delay(period);
    }

    /// Blink forever
    ///
    /// Each iteration toggles the output and blocks for `period`. Only a
    /// reset or power cycle ends it.
    pub fn run_blink(&mut self, period: Duration) -> ! {
        loop {
            self.step(period);
        }
    }

    /// Blink for a fixed number of toggles
    pub fn run_blink_cycles(&mut self, period: Duration, cycles: usize) {
        for _ in 0..cycles {
            self.step(period);
        }
    }

    /// Give back the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
