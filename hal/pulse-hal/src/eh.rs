//! embedded-hal 1.0 adapters
//!
//! Chip HALs in the embedded Rust ecosystem implement the `embedded-hal`
//! traits. These wrappers let such pins and delays stand in wherever the
//! pulse-hal traits are expected.
//!
//! Only pins whose error type is [`Infallible`] are accepted, which matches
//! the on-chip GPIO of every supported target.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::delay::BlockingDelay;
use crate::gpio::OutputPin;

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Wraps an embedded-hal stateful output pin
///
/// The driven level is cached so that [`OutputPin::is_set_high`] can take
/// `&self`; the wrapper is the only writer to the pin.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutputPin<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    /// Wrap a pin, reading back its current output level
    pub fn new(mut pin: P) -> Self {
        let high = infallible(pin.is_set_high());
        Self { pin, high }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutputPin<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn toggle(&mut self) {
        infallible(self.pin.toggle());
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Wraps an embedded-hal blocking delay
pub struct EhDelay<D>(D);

impl<D: DelayNs> EhDelay<D> {
    pub fn new(delay: D) -> Self {
        Self(delay)
    }

    pub fn into_inner(self) -> D {
        self.0
    }
}

impl<D: DelayNs> BlockingDelay for EhDelay<D> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorType, OutputPin as EhOutput};

    #[derive(Default)]
    struct RegisterPin {
        level: bool,
        toggles: u8,
    }

    impl ErrorType for RegisterPin {
        type Error = Infallible;
    }

    impl EhOutput for RegisterPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for RegisterPin {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level)
        }

        fn toggle(&mut self) -> Result<(), Infallible> {
            self.level = !self.level;
            self.toggles += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct SpinDelay {
        elapsed_ns: u64,
    }

    impl DelayNs for SpinDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.elapsed_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_pin_reads_back_initial_level() {
        let pin = EhOutputPin::new(RegisterPin {
            level: true,
            toggles: 0,
        });
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_pin_tracks_writes() {
        let mut pin = EhOutputPin::new(RegisterPin::default());

        pin.set_high();
        assert!(pin.is_set_high());

        pin.toggle();
        assert!(pin.is_set_low());

        let raw = pin.into_inner();
        assert!(!raw.level);
        assert_eq!(raw.toggles, 1);
    }

    #[test]
    fn test_delay_forwards() {
        let mut delay = EhDelay::new(SpinDelay::default());

        delay.delay_ms(3);
        delay.delay(core::time::Duration::from_micros(20));

        assert_eq!(delay.into_inner().elapsed_ns, 3_020_000);
    }
}
