//! Compile-time firmware configuration
//!
//! The board comes from a cargo feature, the pin and period from [`BLINK`].
//! Edit and rebuild to change them.

use pulse_core::board::BoardProfile;
use pulse_core::BlinkConfig;

#[cfg(all(feature = "board-pico", feature = "board-pico-w"))]
compile_error!("Select exactly one of the `board-pico` and `board-pico-w` features");

#[cfg(not(any(feature = "board-pico", feature = "board-pico-w")))]
compile_error!("Select a board with the `board-pico` or `board-pico-w` feature");

#[cfg(feature = "board-pico")]
pub const BOARD: BoardProfile = pulse_core::board::PICO;

#[cfg(feature = "board-pico-w")]
pub const BOARD: BoardProfile = pulse_core::board::PICO_W;

/// On-board LED every 500 ms
#[cfg(feature = "board-pico")]
pub const BLINK: BlinkConfig = BlinkConfig::DEFAULT;

// The W's LED sits behind the wireless chip; blink an external LED instead
#[cfg(feature = "board-pico-w")]
pub const BLINK: BlinkConfig = BlinkConfig::new("GP15", pulse_core::config::DEFAULT_PERIOD);
