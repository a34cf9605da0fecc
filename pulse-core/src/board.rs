//! Pin identifiers and board profiles
//!
//! Boards name their pins differently: the Pico's on-board LED is plain
//! GPIO25, while on the Pico W the LED hangs off the wireless chip and the
//! same GPIO drives the radio's chip select. Application code asks for a pin
//! by text (`"LED"`, `"GP25"`, `"gpio25"`, `"25"`) and a [`BoardProfile`]
//! turns that text into a concrete [`BoardLine`].
//!
//! A leading `!` marks the pin active-low, so logical `true` drives the line
//! low (LEDs wired to 3V3 through a resistor).

use core::fmt;

use heapless::String;

use crate::error::HardwareBindingError;

/// Maximum length of a named pin alias
pub const MAX_ALIAS_LEN: usize = 16;

/// A physical line on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardLine {
    /// Plain MCU GPIO
    Gpio(u8),
    /// GPIO on the wireless module, only reachable through its driver
    Wireless(u8),
}

/// What an identifier points at before board resolution
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineSelector {
    /// Board-specific name such as `LED`
    Alias(String<MAX_ALIAS_LEN>),
    /// GPIO number
    Gpio(u8),
}

/// Parsed pin identifier
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinIdentifier {
    pub selector: LineSelector,
    /// Logical `true` drives the line low
    pub active_low: bool,
}

impl PinIdentifier {
    /// Parse an identifier
    ///
    /// Supports formats:
    /// - `"LED"` -> board alias
    /// - `"25"`, `"GP25"`, `"gpio25"` -> GPIO 25
    /// - `"!GP15"` -> GPIO 15, active-low
    ///
    /// Whitespace around the identifier and after the `!` is ignored.
    pub fn parse(s: &str) -> Result<Self, HardwareBindingError> {
        let s = s.trim();

        let (s, active_low) = match s.strip_prefix('!') {
            Some(rest) => (rest.trim_start(), true),
            None => (s, false),
        };

        if s.is_empty() {
            return Err(HardwareBindingError::InvalidIdentifier);
        }

        if let Some(line) = parse_gpio(s) {
            return Ok(Self {
                selector: LineSelector::Gpio(line?),
                active_low,
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(HardwareBindingError::InvalidIdentifier);
        }

        let alias =
            String::try_from(s).map_err(|_| HardwareBindingError::InvalidIdentifier)?;

        Ok(Self {
            selector: LineSelector::Alias(alias),
            active_low,
        })
    }
}

impl fmt::Display for PinIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active_low {
            f.write_str("!")?;
        }
        match &self.selector {
            LineSelector::Alias(name) => f.write_str(name),
            LineSelector::Gpio(n) => write!(f, "GP{}", n),
        }
    }
}

/// Numeric forms: `25`, `GP25`, `gpio25`
///
/// Returns `None` when the text is not numeric at all, so that aliases such
/// as `GPS` fall through to alias parsing.
fn parse_gpio(s: &str) -> Option<Result<u8, HardwareBindingError>> {
    let digits = ["gpio", "gp"]
        .iter()
        .find_map(|prefix| {
            let head = s.get(..prefix.len())?;
            if head.eq_ignore_ascii_case(prefix) {
                s.get(prefix.len()..)
            } else {
                None
            }
        })
        .filter(|rest| is_digits(rest))
        .unwrap_or(s);

    if !is_digits(digits) {
        return None;
    }

    Some(
        digits
            .parse::<u8>()
            .map_err(|_| HardwareBindingError::LineOutOfRange),
    )
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Named pin on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardAlias {
    pub name: &'static str,
    pub line: BoardLine,
    pub active_low: bool,
}

/// Fully resolved pin: which line, and its polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedPin {
    pub line: BoardLine,
    pub active_low: bool,
}

/// Board pin table
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardProfile {
    pub name: &'static str,
    /// Number of MCU GPIO lines (0..gpio_count)
    pub gpio_count: u8,
    /// GPIOs wired to on-board functions
    pub reserved: &'static [u8],
    pub aliases: &'static [BoardAlias],
}

/// Raspberry Pi Pico (RP2040)
pub const PICO: BoardProfile = BoardProfile {
    name: "pico",
    gpio_count: 30,
    // SMPS power save, VBUS sense, VSYS sense
    reserved: &[23, 24, 29],
    aliases: &[BoardAlias {
        name: "LED",
        line: BoardLine::Gpio(25),
        active_low: false,
    }],
};

/// Raspberry Pi Pico W (RP2040 + CYW43439)
pub const PICO_W: BoardProfile = BoardProfile {
    name: "pico_w",
    gpio_count: 30,
    // Wireless power, data, chip select and clock
    reserved: &[23, 24, 25, 29],
    aliases: &[BoardAlias {
        name: "LED",
        line: BoardLine::Wireless(0),
        active_low: false,
    }],
};

impl BoardProfile {
    /// Resolve a parsed identifier against this board
    pub fn resolve(&self, id: &PinIdentifier) -> Result<ResolvedPin, HardwareBindingError> {
        match &id.selector {
            LineSelector::Gpio(n) => {
                if *n >= self.gpio_count {
                    return Err(HardwareBindingError::LineOutOfRange);
                }
                if self.reserved.contains(n) {
                    return Err(HardwareBindingError::Reserved);
                }
                Ok(ResolvedPin {
                    line: BoardLine::Gpio(*n),
                    active_low: id.active_low,
                })
            }
            LineSelector::Alias(name) => {
                let alias = self
                    .find_alias(name)
                    .ok_or(HardwareBindingError::UnknownIdentifier)?;
                Ok(ResolvedPin {
                    line: alias.line,
                    // `!` on an already active-low alias cancels out
                    active_low: alias.active_low != id.active_low,
                })
            }
        }
    }

    /// Parse and resolve in one step
    pub fn resolve_str(&self, s: &str) -> Result<ResolvedPin, HardwareBindingError> {
        self.resolve(&PinIdentifier::parse(s)?)
    }

    /// Look up a named pin (case-insensitive)
    pub fn find_alias(&self, name: &str) -> Option<&BoardAlias> {
        self.aliases
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}
