//! Shared state between tasks
//!
//! Both are lock-free and safe to touch from any task.

use wpcrasher_hal_rp2040::{DisplayPowerPublisher, TouchLine};

/// Touch interrupt delivery switch, flipped by the power gate
pub static TOUCH_LINE: TouchLine = TouchLine::new();

/// Display power publisher, subscribed to by the power task
pub static DISPLAY_POWER: DisplayPowerPublisher = DisplayPowerPublisher::new();
