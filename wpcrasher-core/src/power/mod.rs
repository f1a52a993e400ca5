//! Monitor power-state handling
//!
//! The touch interrupt is only worth servicing while the display is on.
//! The gate switches the interrupt source with the monitor state, and the
//! subscription guard keeps the host notification registered for as long
//! as the device lives.

pub mod gate;
pub mod subscription;

pub use gate::{on_power_setting_change, GateAction, MonitorState, PowerGate, PowerGateError};
pub use subscription::PowerSubscription;
