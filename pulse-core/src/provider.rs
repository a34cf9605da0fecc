//! Pin provider seam
//!
//! Chip HALs own the physical pins. The controller only ever asks a provider
//! for a resolved line configured as output.

use pulse_hal::OutputPin;

use crate::board::BoardLine;
use crate::error::HardwareBindingError;

/// Source of output pins
pub trait PinProvider {
    /// Pin type handed out by this provider
    type Pin: OutputPin;

    /// Claim `line` and configure it as output driven to `initial_high`
    ///
    /// On error nothing is claimed.
    fn claim_output(
        &mut self,
        line: BoardLine,
        initial_high: bool,
    ) -> Result<Self::Pin, HardwareBindingError>;

    /// Check whether `line` can still be claimed
    fn is_available(&self, line: BoardLine) -> bool;
}
