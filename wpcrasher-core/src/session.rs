//! Per-device session state
//!
//! A session is created idle when the host creates the device and dropped
//! with it. Its state is split by execution context:
//!
//! - [`GestureTimer`]: every timing field, mutated only from the interrupt
//!   path
//! - [`PowerGate`]: the last monitor state, mutated only from the power
//!   notification path
//!
//! The halves share no fields. [`DeviceSession::split`] hands out disjoint
//! borrows so each context can own its half; the interrupt source is the
//! only resource both sides affect, and only the gate switches it.

use wpcrasher_hal::{FatalStopPrimitives, InterruptSource, MonotonicClock, PowerSettingId};

use crate::fatal::FatalStopTrigger;
use crate::gesture::{GestureTimer, IsrDisposition};
use crate::power::{on_power_setting_change, GateAction, PowerGate, PowerGateError};

/// Device session: gesture timer plus power gate
pub struct DeviceSession<S, P> {
    gesture: GestureTimer<FatalStopTrigger<P>>,
    power: PowerGate<S>,
}

impl<S: InterruptSource, P: FatalStopPrimitives> DeviceSession<S, P> {
    /// Create an idle session with no monitor state seen yet
    pub fn new(source: S, primitives: P) -> Self {
        Self {
            gesture: GestureTimer::new(FatalStopTrigger::new(primitives)),
            power: PowerGate::new(source),
        }
    }

    /// Split into the interrupt-path and power-path halves
    pub fn split(&mut self) -> (&mut GestureTimer<FatalStopTrigger<P>>, &mut PowerGate<S>) {
        (&mut self.gesture, &mut self.power)
    }

    /// Consume the session into its two halves
    pub fn into_parts(self) -> (GestureTimer<FatalStopTrigger<P>>, PowerGate<S>) {
        (self.gesture, self.power)
    }

    /// Touch interrupt entry point; never claims the interrupt
    pub fn on_interrupt<C: MonotonicClock>(&mut self, clock: &C) -> IsrDisposition {
        self.gesture.on_interrupt(clock)
    }

    /// Power-setting entry point, with this session's gate as context
    pub fn on_power_setting_change(
        &mut self,
        setting: &PowerSettingId,
        value: Option<&[u8]>,
    ) -> Result<GateAction, PowerGateError> {
        on_power_setting_change(setting, value, Some(&mut self.power))
    }

    /// Get access to the gesture timer
    pub fn gesture(&self) -> &GestureTimer<FatalStopTrigger<P>> {
        &self.gesture
    }

    /// Get access to the power gate
    pub fn power(&self) -> &PowerGate<S> {
        &self.power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use wpcrasher_hal::{BugCheck, GUID_MONITOR_POWER_ON};

    use crate::config::SWIPES_REQUIRED;
    use crate::gesture::GestureOutcome;
    use crate::power::MonitorState;
    use crate::time::Ticks;

    #[derive(Default)]
    struct MockSource {
        active: bool,
    }

    impl InterruptSource for MockSource {
        fn activate(&mut self) {
            self.active = true;
        }

        fn deactivate(&mut self) {
            self.active = false;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    // Debugger always attached so the trigger returns
    #[derive(Default)]
    struct AttachedDebugger {
        breaks: u32,
    }

    impl FatalStopPrimitives for AttachedDebugger {
        fn is_debugger_attached(&self) -> bool {
            true
        }

        fn debug_break(&mut self) {
            self.breaks += 1;
        }

        fn force_system_stop(&mut self, check: BugCheck) -> ! {
            panic!("unexpected system stop {:#x}", check.code);
        }
    }

    struct ManualClock(Cell<u64>);

    impl ManualClock {
        fn advance(&self, by: Ticks) {
            self.0.set(self.0.get() + by.as_ticks());
        }
    }

    impl MonotonicClock for ManualClock {
        fn now_ticks(&self) -> u64 {
            self.0.get()
        }
    }

    fn session() -> DeviceSession<MockSource, AttachedDebugger> {
        DeviceSession::new(MockSource::default(), AttachedDebugger::default())
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = session();
        assert!(session.gesture().is_idle());
        assert_eq!(session.power().last_state(), MonitorState::Unknown);
    }

    #[test]
    fn test_power_path_switches_source() {
        let mut session = session();
        let on = MonitorState::RAW_ON.to_le_bytes();
        let off = MonitorState::RAW_OFF.to_le_bytes();

        let action = session.on_power_setting_change(&GUID_MONITOR_POWER_ON, Some(&on));
        assert_eq!(action, Ok(GateAction::Activated));
        assert!(session.power().source().is_active());

        let action = session.on_power_setting_change(&GUID_MONITOR_POWER_ON, Some(&off));
        assert_eq!(action, Ok(GateAction::Deactivated));
        assert!(!session.power().source().is_active());
    }

    #[test]
    fn test_full_pattern_breaks_into_debugger() {
        let mut session = session();
        let clock = ManualClock(Cell::new(0));
        let step = Ticks::from_millis(50);

        for swipe in 0..SWIPES_REQUIRED {
            if swipe > 0 {
                clock.advance(Ticks::from_secs(7));
            }
            // 5.05 s of continuous touch: the last event counts the swipe
            for _ in 0..=101 {
                assert_eq!(session.on_interrupt(&clock), IsrDisposition::NotClaimed);
                clock.advance(step);
            }
        }

        assert_eq!(
            session.gesture().last_outcome(),
            Some(GestureOutcome::Triggered)
        );
        assert_eq!(session.gesture().terminator().primitives().breaks, 1);
        assert!(session.gesture().is_idle());
    }

    #[test]
    fn test_split_halves_are_independent() {
        let mut session = session();
        let (gesture, power) = session.split();

        assert_eq!(gesture.on_input_event(Ticks::ZERO), GestureOutcome::Started);
        assert_eq!(power.apply(MonitorState::Off), GateAction::Deactivated);

        assert!(!session.gesture().is_idle());
        assert_eq!(session.power().last_state(), MonitorState::Off);
    }
}
