//! Board-agnostic core logic for the swipe-pattern crash trigger
//!
//! This crate contains all logic that does not depend on a specific host:
//!
//! - Fixed-resolution timestamps
//! - Gesture timing constants
//! - Swipe-pattern state machine run on every touch interrupt
//! - Fatal-stop trigger (breakpoint or forced system stop)
//! - Monitor power-state gate for the touch interrupt
//! - Power-notification subscription guard
//! - Per-device session tying the above together

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod fatal;
pub mod gesture;
pub mod power;
pub mod session;
pub mod time;

pub use fatal::{FatalStopTrigger, Terminate};
pub use gesture::{AbandonReason, GestureOutcome, GestureTimer, IsrDisposition};
pub use power::{
    on_power_setting_change, GateAction, MonitorState, PowerGate, PowerGateError,
    PowerSubscription,
};
pub use session::DeviceSession;
pub use time::Ticks;
