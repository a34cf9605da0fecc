//! Blink configuration
//!
//! Configuration is fixed at compile time; the firmware picks its board with
//! a cargo feature and its pin and period from a `const`.

use core::time::Duration;

use crate::board::{BoardProfile, ResolvedPin};
use crate::error::HardwareBindingError;

/// Default blink half-period (time between toggles)
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(500);

/// Default pin, the on-board LED
pub const DEFAULT_PIN: &str = "LED";

/// What to blink and how fast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    /// Pin identifier, resolved against the board at acquisition
    pub pin: &'static str,
    /// Time between toggles
    pub period: Duration,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BlinkConfig {
    pub const DEFAULT: Self = Self::new(DEFAULT_PIN, DEFAULT_PERIOD);

    pub const fn new(pin: &'static str, period: Duration) -> Self {
        Self { pin, period }
    }

    /// Check that the pin exists on `board` without claiming it
    pub fn validate(&self, board: &BoardProfile) -> Result<ResolvedPin, HardwareBindingError> {
        board.resolve_str(self.pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardLine, PICO, PICO_W};

    #[test]
    fn test_default_config() {
        let config = BlinkConfig::default();
        assert_eq!(config.pin, "LED");
        assert_eq!(config.period, Duration::from_millis(500));
    }

    #[test]
    fn test_validate() {
        let config = BlinkConfig::DEFAULT;
        assert_eq!(config.validate(&PICO).unwrap().line, BoardLine::Gpio(25));
        assert_eq!(
            config.validate(&PICO_W).unwrap().line,
            BoardLine::Wireless(0)
        );

        let bad = BlinkConfig::new("gpio99", DEFAULT_PERIOD);
        assert_eq!(
            bad.validate(&PICO),
            Err(HardwareBindingError::LineOutOfRange)
        );
    }
}
