//! Fatal-stop primitives
//!
//! Low-level operations the host provides for ending the system on purpose.

/// Stop code and parameters passed to the forced system stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BugCheck {
    /// Reason code identifying why the stop was raised
    pub code: u32,
    /// Auxiliary parameters recorded alongside the code
    pub params: [usize; 4],
}

impl BugCheck {
    /// Crash raised deliberately by the user
    pub const MANUALLY_INITIATED: Self = Self {
        code: 0xE2,
        params: [1, 0, 0, 0],
    };
}

/// Host operations used by the fatal-stop trigger
pub trait FatalStopPrimitives {
    /// Check whether an interactive debugger is attached right now
    ///
    /// The answer may lag a recent attach or detach by a short time.
    fn is_debugger_attached(&self) -> bool;

    /// Break into the attached debugger and resume afterwards
    fn debug_break(&mut self);

    /// Stop the system with the given reason; never returns
    fn force_system_stop(&mut self, check: BugCheck) -> !;
}
