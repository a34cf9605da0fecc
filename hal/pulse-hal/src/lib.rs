//! Pulse Hardware Abstraction Layer
//!
//! This crate defines the two hardware capabilities a timed digital output
//! needs: a pin that can be driven high or low, and a delay that blocks the
//! calling thread. Chip-specific crates implement them, the core crate only
//! ever sees the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pulse-firmware                         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pulse-core (controller, board tables)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pulse-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pulse-hal-rp2040                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`delay::BlockingDelay`] - Blocking delay
//!
//! With the `embedded-hal` feature, [`eh`] adapts embedded-hal 1.0 pins and
//! delays to these traits.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
#[cfg(any(feature = "embedded-hal", test))]
pub mod eh;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::BlockingDelay;
pub use gpio::OutputPin;
