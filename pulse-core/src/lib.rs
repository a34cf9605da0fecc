//! Board-agnostic core of the blink firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Pin identifier parsing and board profiles (named vs numbered pins)
//! - The [`PinProvider`] seam that chip HALs implement to hand out pins
//! - [`DigitalOutputController`], which owns one output pin and a blocking
//!   delay and drives a deterministic sequence of levels
//! - Compile-time blink configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod provider;

#[cfg(test)]
mod mock;

pub use board::{BoardLine, BoardProfile, PinIdentifier, ResolvedPin};
pub use config::BlinkConfig;
pub use controller::DigitalOutputController;
pub use error::HardwareBindingError;
pub use provider::PinProvider;

pub use pulse_hal::{BlockingDelay, OutputPin};
