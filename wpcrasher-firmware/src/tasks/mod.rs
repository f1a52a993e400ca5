//! Embassy async tasks
//!
//! The touch task owns the gesture timer (interrupt path); the power task
//! owns the power gate (notification path).

pub mod power;
pub mod touch;

pub use power::power_task;
pub use touch::touch_task;
