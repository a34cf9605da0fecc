//! GPIO ownership for config-selected pins
//!
//! Moves every GPIO out of the embassy `Peripherals` so that a pin can be
//! requested by line number at runtime, after identifier resolution.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::{Peri, Peripherals};
use pulse_core::{BoardLine, HardwareBindingError, PinProvider};
use pulse_hal::eh::EhOutputPin;

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Output pin handed out by [`PinBank`]
pub type RpOutput = EhOutputPin<Output<'static>>;

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Create a pin bank from peripherals
    ///
    /// Takes ownership of all GPIO pins; the remaining peripherals are
    /// dropped. After this call, pins must be obtained through `take()` or
    /// [`PinProvider::claim_output`]. Pins are never returned.
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    ///
    /// Returns the pin if available, or an error if:
    /// - Pin number is invalid (>= 30)
    /// - Pin was already taken
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, HardwareBindingError> {
        self.pins
            .get_mut(usize::from(pin_num))
            .ok_or(HardwareBindingError::LineOutOfRange)?
            .take()
            .ok_or(HardwareBindingError::AlreadyClaimed)
    }
}

impl PinProvider for PinBank {
    type Pin = RpOutput;

    fn claim_output(
        &mut self,
        line: BoardLine,
        initial_high: bool,
    ) -> Result<RpOutput, HardwareBindingError> {
        // Wireless lines need the CYW43 driver and its firmware blob
        let BoardLine::Gpio(n) = line else {
            return Err(HardwareBindingError::Unsupported);
        };
        let pin = self.take(n)?;
        let level = if initial_high { Level::High } else { Level::Low };
        Ok(EhOutputPin::new(Output::new(pin, level)))
    }

    fn is_available(&self, line: BoardLine) -> bool {
        match line {
            BoardLine::Gpio(n) => matches!(self.pins.get(usize::from(n)), Some(Some(_))),
            BoardLine::Wireless(_) => false,
        }
    }
}
