//! Board pin assignments
//!
//! Touch controller IRQ on GPIO20 (open drain, active low) and the display
//! power enable on GPIO21 (high while the panel is lit).

use embassy_rp::gpio::{Input, Pull};
use embassy_rp::Peripherals;

/// Pins used by the crash trigger
pub struct Board {
    /// Touch controller interrupt request
    pub touch_irq: Input<'static>,
    /// Display power enable, sampled as the monitor power state
    pub display_power: Input<'static>,
}

impl Board {
    /// Claim the board pins
    pub fn new(p: Peripherals) -> Self {
        Self {
            touch_irq: Input::new(p.PIN_20, Pull::Up),
            display_power: Input::new(p.PIN_21, Pull::Down),
        }
    }
}
