//! Swipe-pattern recognition
//!
//! Runs on every touch interrupt. The touch controller pulses its interrupt
//! line continuously while a finger moves, so a swipe is a burst of closely
//! spaced events and a rest is a gap between bursts.

pub mod outcome;
pub mod timer;

pub use outcome::{AbandonReason, GestureOutcome, IsrDisposition};
pub use timer::GestureTimer;
