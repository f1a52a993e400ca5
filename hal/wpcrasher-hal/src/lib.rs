//! WpCrasher Hardware Abstraction Layer
//!
//! This crate defines the operations the crash trigger consumes from its
//! host. The core logic in `wpcrasher-core` is written against these traits
//! only, so the same state machine runs on a board, under a kernel shell, or
//! inside a host-side test with recording stubs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Host shell (wpcrasher-firmware, etc.)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wpcrasher-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wpcrasher-hal-rp2040                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::MonotonicClock`] - Unbiased interrupt-time source
//! - [`interrupt::InterruptSource`] - Touch interrupt activation
//! - [`fatal::FatalStopPrimitives`] - Debugger probe, breakpoint, forced stop
//! - [`power::PowerNotifications`] - Power-setting callback registration

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod fatal;
pub mod interrupt;
pub mod power;

// Re-export key traits at crate root for convenience
pub use clock::MonotonicClock;
pub use fatal::{BugCheck, FatalStopPrimitives};
pub use interrupt::InterruptSource;
pub use power::{PowerNotifications, PowerSettingId, GUID_MONITOR_POWER_ON};
