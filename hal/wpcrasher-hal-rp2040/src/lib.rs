//! RP2040-specific host shell for the crash trigger
//!
//! This crate provides the board side of the `wpcrasher-hal` traits:
//! - Touch interrupt line gating and edge waiting
//! - Embassy-backed monotonic clock
//! - Breakpoint and panic based fatal stop
//! - Display power notification publisher

#![no_std]

pub mod clock;
pub mod fatal;
pub mod power;
pub mod touch;

pub use clock::EmbassyClock;
pub use fatal::ProbeFatalStop;
pub use power::{DisplayPowerPublisher, PublisherError};
pub use touch::{TouchIrq, TouchLine, TouchLineControl};
