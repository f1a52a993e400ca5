//! Interrupt source control
//!
//! The crash trigger observes an interrupt line it does not own. The host
//! exposes just enough control to stop delivery while the display is off.

/// A hardware interrupt source whose delivery can be switched on and off
///
/// Both operations must be idempotent and must not block: the power gate
/// may call them from a deferred context while the interrupt path runs.
pub trait InterruptSource {
    /// Report the interrupt as active so events are delivered again
    fn activate(&mut self);

    /// Report the interrupt as inactive so no further events are delivered
    fn deactivate(&mut self);

    /// Check whether events are currently being delivered
    fn is_active(&self) -> bool;
}
