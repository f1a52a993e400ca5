//! Property tests for swipe-pattern recognition and the power gate

use proptest::prelude::*;

use wpcrasher_core::config::{MAX_PATTERN_PERIOD, SWIPES_REQUIRED};
use wpcrasher_core::{
    on_power_setting_change, AbandonReason, GateAction, GestureOutcome, GestureTimer,
    MonitorState, PowerGate, Terminate, Ticks,
};
use wpcrasher_hal::{InterruptSource, GUID_MONITOR_POWER_ON};

#[derive(Default)]
struct CountingStop {
    fired: u32,
}

impl Terminate for CountingStop {
    fn terminate(&mut self) {
        self.fired += 1;
    }
}

#[derive(Default)]
struct CountingSource {
    active: bool,
    calls: u32,
}

impl InterruptSource for CountingSource {
    fn activate(&mut self) {
        self.active = true;
        self.calls += 1;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.calls += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// One swipe: event spacing and how long the finger stays down (ms)
fn swipe() -> impl Strategy<Value = (u64, u64)> {
    (10u64..=200, 5_400u64..=6_500)
}

proptest! {
    #[test]
    fn valid_pattern_triggers_exactly_once(
        swipes in proptest::collection::vec(swipe(), SWIPES_REQUIRED as usize),
        rests in proptest::collection::vec(5_001u64..=8_000, SWIPES_REQUIRED as usize - 1),
        origin in 1u64..1_000_000,
    ) {
        let mut timer = GestureTimer::new(CountingStop::default());
        let mut now = Ticks::from_millis(origin);

        for (index, &(step, hold)) in swipes.iter().enumerate() {
            let start = now;
            let last_swipe = index + 1 == SWIPES_REQUIRED as usize;

            loop {
                let outcome = timer.on_input_event(now);

                if last_swipe && outcome == GestureOutcome::Triggered {
                    break;
                }
                prop_assert!(!outcome.is_terminal(), "unexpected {:?}", outcome);
                prop_assert_eq!(timer.terminator().fired, 0);

                let next = now + Ticks::from_millis(step);
                if !last_swipe && next.elapsed_since(start) > Ticks::from_millis(hold) {
                    break;
                }
                if last_swipe {
                    // The final swipe must trigger shortly after crossing 5 s
                    let limit = Ticks::from_millis(5_000 + 2 * step);
                    prop_assert!(next.elapsed_since(start) <= limit);
                }
                now = next;
            }

            if !last_swipe {
                prop_assert_eq!(timer.swipes(), index as u8 + 1);
                now = now + Ticks::from_millis(rests[index]);
            }
        }

        prop_assert_eq!(timer.terminator().fired, 1);
        prop_assert!(timer.is_idle());
    }

    #[test]
    fn attempts_never_outlive_pattern_period(
        swipes in proptest::collection::vec((10u64..=200, 1_000u64..=4_900), 12..16),
        rests in proptest::collection::vec(5_001u64..=8_000, 16),
        origin in 1u64..1_000_000,
    ) {
        // Swipes too short to count with valid rests between them: only the
        // pattern period can end the attempt
        let start = Ticks::from_millis(origin);
        let mut events = Vec::new();
        let mut now = start;
        for (index, &(step, hold)) in swipes.iter().enumerate() {
            let swipe_start = now;
            while now.elapsed_since(swipe_start) <= Ticks::from_millis(hold) {
                events.push(now);
                now = now + Ticks::from_millis(step);
            }
            now = *events.last().unwrap() + Ticks::from_millis(rests[index]);
        }

        let mut timer = GestureTimer::new(CountingStop::default());
        let mut timed_out = false;

        for at in events {
            let outcome = timer.on_input_event(at);

            if at.elapsed_since(start) > MAX_PATTERN_PERIOD {
                prop_assert_eq!(
                    outcome,
                    GestureOutcome::Abandoned(AbandonReason::PatternTimeout)
                );
                prop_assert!(timer.is_idle());
                timed_out = true;
                break;
            }
            prop_assert!(!outcome.is_terminal(), "unexpected {:?}", outcome);
            prop_assert_eq!(timer.swipes(), 0);
        }

        prop_assert!(timed_out);
        prop_assert_eq!(timer.terminator().fired, 0);
    }

    #[test]
    fn power_gate_acts_once_per_change(raws in proptest::collection::vec(0u32..3, 0..64)) {
        let mut gate = PowerGate::new(CountingSource::default());
        let mut last = MonitorState::Unknown;
        let mut changes = 0;

        for raw in raws {
            let state = MonitorState::from_raw(raw);
            let payload = raw.to_le_bytes();
            let action =
                on_power_setting_change(&GUID_MONITOR_POWER_ON, Some(&payload), Some(&mut gate));

            if state == last {
                prop_assert_eq!(action, Ok(GateAction::Unchanged));
            } else {
                changes += 1;
                last = state;
            }
            prop_assert_eq!(gate.source().is_active(), state == MonitorState::On);
        }

        prop_assert_eq!(gate.source().calls, changes);
    }
}
