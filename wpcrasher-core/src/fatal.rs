//! Fatal-stop trigger
//!
//! Ends the system on purpose once the swipe pattern completes. With a
//! debugger attached it breaks in instead, so the developer can look around
//! without losing the session.

use wpcrasher_hal::{BugCheck, FatalStopPrimitives};

/// Capability to end the system
///
/// The gesture state machine only sees this trait, which keeps it testable
/// without halting anything.
pub trait Terminate {
    /// Terminate the system, or hand control to a debugger and return
    fn terminate(&mut self);
}

impl<T: Terminate + ?Sized> Terminate for &mut T {
    fn terminate(&mut self) {
        (**self).terminate();
    }
}

/// Breakpoint-or-stop trigger backed by host primitives
#[derive(Debug)]
pub struct FatalStopTrigger<P> {
    primitives: P,
}

impl<P: FatalStopPrimitives> FatalStopTrigger<P> {
    /// Create a trigger over the given host primitives
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }

    /// Get access to the underlying primitives
    pub fn primitives(&self) -> &P {
        &self.primitives
    }
}

impl<P: FatalStopPrimitives> Terminate for FatalStopTrigger<P> {
    fn terminate(&mut self) {
        if self.primitives.is_debugger_attached() {
            self.primitives.debug_break();
        } else {
            self.primitives.force_system_stop(BugCheck::MANUALLY_INITIATED);
        }
    }
}
