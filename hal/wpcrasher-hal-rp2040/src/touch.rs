//! Touch interrupt line
//!
//! The touch controller pulses its IRQ pin low for every report while a
//! finger is down. [`TouchLine`] is the shared on/off switch for delivering
//! those pulses; [`TouchIrq`] waits for the next pulse that should be
//! delivered.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::digital::Wait;
use portable_atomic::{AtomicBool, Ordering};
use wpcrasher_hal::InterruptSource;

/// Delivery switch shared between the power path and the interrupt path
pub struct TouchLine {
    active: AtomicBool,
    changed: Signal<CriticalSectionRawMutex, ()>,
}

impl Default for TouchLine {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchLine {
    /// Create a line that starts delivering (the interrupt is connected at boot)
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
            changed: Signal::new(),
        }
    }

    /// Check if pulses are currently delivered
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Switch delivery on or off
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Release);
        self.changed.signal(());
    }

    /// Wait until delivery is switched on
    pub async fn wait_active(&self) {
        while !self.is_active() {
            self.changed.wait().await;
        }
    }

    /// Control handle implementing [`InterruptSource`]
    pub fn control(&'static self) -> TouchLineControl {
        TouchLineControl { line: self }
    }
}

/// [`InterruptSource`] handle for a static [`TouchLine`]
#[derive(Clone, Copy)]
pub struct TouchLineControl {
    line: &'static TouchLine,
}

impl InterruptSource for TouchLineControl {
    fn activate(&mut self) {
        self.line.set_active(true);
    }

    fn deactivate(&mut self) {
        self.line.set_active(false);
    }

    fn is_active(&self) -> bool {
        self.line.is_active()
    }
}

/// Touch IRQ pin gated by a [`TouchLine`]
pub struct TouchIrq<P> {
    pin: P,
    line: &'static TouchLine,
}

impl<P: Wait> TouchIrq<P> {
    /// Wrap the IRQ pin
    pub fn new(pin: P, line: &'static TouchLine) -> Self {
        Self { pin, line }
    }

    /// Wait for the next pulse while the line is active
    ///
    /// Pulses that arrive after the line was switched off are dropped.
    pub async fn next_pulse(&mut self) -> Result<(), P::Error> {
        loop {
            self.line.wait_active().await;
            self.pin.wait_for_falling_edge().await?;
            if self.line.is_active() {
                return Ok(());
            }
        }
    }
}
