//! Pin acquisition errors

use core::fmt;

/// Failure to bind a hardware pin
///
/// Acquisition is the only fallible step. Once a pin is bound, driving it
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareBindingError {
    /// Text is not a pin identifier (empty, bad characters, too long)
    InvalidIdentifier,
    /// Named pin does not exist on this board
    UnknownIdentifier,
    /// GPIO number beyond the board's lines
    LineOutOfRange,
    /// Line is wired to an on-board function and cannot be used as output
    Reserved,
    /// Line was already handed out
    AlreadyClaimed,
    /// Line exists but this pin provider cannot drive it
    Unsupported,
}

impl fmt::Display for HardwareBindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidIdentifier => "invalid pin identifier",
            Self::UnknownIdentifier => "pin name not defined for this board",
            Self::LineOutOfRange => "gpio number out of range for this board",
            Self::Reserved => "pin reserved for an on-board function",
            Self::AlreadyClaimed => "pin already claimed",
            Self::Unsupported => "pin cannot be driven by this provider",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            std::format!("{}", HardwareBindingError::AlreadyClaimed),
            "pin already claimed"
        );
        assert_eq!(
            std::format!("{}", HardwareBindingError::UnknownIdentifier),
            "pin name not defined for this board"
        );
    }
}
