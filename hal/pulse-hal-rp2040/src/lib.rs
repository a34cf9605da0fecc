//! RP2040 bindings for the blink firmware
//!
//! This crate provides RP2040-specific implementations of the `pulse-hal`
//! traits and the `pulse-core` pin provider:
//!
//! - [`pins::PinBank`]: GPIO ownership, hands out pins by line number
//! - [`delay::BlockingTimer`]: busy-wait delay on the embassy time driver

#![no_std]

pub mod delay;
pub mod pins;

pub use delay::{blocking_timer, BlockingTimer};
pub use pins::{PinBank, RpOutput};
