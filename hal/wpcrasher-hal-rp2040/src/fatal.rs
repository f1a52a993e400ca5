//! Fatal stop for Cortex-M0+
//!
//! ARMv6-M cannot read `DHCSR.C_DEBUGEN` from software, so whether a probe
//! is attached is decided when the firmware is built rather than probed at
//! runtime. A forced stop panics; `panic-probe` then halts the core and
//! reports the stop code over RTT, which is the crash dump on this board.

use wpcrasher_hal::{BugCheck, FatalStopPrimitives};

/// Fatal-stop primitives for a board that may run under a debug probe
#[derive(Debug, Clone, Copy)]
pub struct ProbeFatalStop {
    probe_attached: bool,
}

impl ProbeFatalStop {
    /// Create the primitives
    ///
    /// # Arguments
    /// - `probe_attached`: break into the probe instead of stopping
    pub const fn new(probe_attached: bool) -> Self {
        Self { probe_attached }
    }
}

impl FatalStopPrimitives for ProbeFatalStop {
    fn is_debugger_attached(&self) -> bool {
        self.probe_attached
    }

    fn debug_break(&mut self) {
        cortex_m::asm::bkpt();
    }

    fn force_system_stop(&mut self, check: BugCheck) -> ! {
        #[cfg(feature = "defmt")]
        defmt::panic!(
            "system stop {=u32:#x} ({=usize:#x}, {=usize:#x}, {=usize:#x}, {=usize:#x})",
            check.code,
            check.params[0],
            check.params[1],
            check.params[2],
            check.params[3]
        );

        #[cfg(not(feature = "defmt"))]
        panic!(
            "system stop {:#x} ({:#x}, {:#x}, {:#x}, {:#x})",
            check.code, check.params[0], check.params[1], check.params[2], check.params[3]
        );
    }
}
