//! Gesture timing state machine
//!
//! Recognises the crash pattern from raw interrupt timestamps:
//!
//! 1. Run a finger on the screen for 5 to 10 seconds
//! 2. Lift it for 5 to 15 seconds
//! 3. Repeat until [`SWIPES_REQUIRED`] swipes have been counted
//!
//! The whole pattern must finish within [`MAX_PATTERN_PERIOD`] of its first
//! event. Any timing outside these windows silently drops the attempt and
//! the next event starts over.
//!
//! The timer is owned by the interrupt path. It holds every timing field of
//! the device session, so nothing else needs to touch it while interrupts
//! are being serviced.

use wpcrasher_hal::MonotonicClock;

use super::outcome::{AbandonReason, GestureOutcome, IsrDisposition};
use crate::config::{
    MAX_PATTERN_PERIOD, SINGLE_SWIPE_MAX_INTERVAL, SINGLE_SWIPE_MAX_PERIOD,
    SINGLE_SWIPE_MIN_PERIOD, SWIPES_REQUIRED, SWIPE_REST_MAX_PERIOD, SWIPE_REST_MIN_PERIOD,
};
use crate::fatal::Terminate;
use crate::time::Ticks;

/// Timing state of an attempt in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pattern {
    /// First event of the attempt
    started_at: Ticks,
    /// First event of the current swipe
    swipe_started_at: Ticks,
    /// Most recently processed event
    last_event_at: Ticks,
    /// Swipes counted so far, `0..=SWIPES_REQUIRED`
    swipes: u8,
    /// Current swipe already counted
    swipe_counted: bool,
}

impl Pattern {
    fn starting_at(now: Ticks) -> Self {
        Self {
            started_at: now,
            swipe_started_at: now,
            last_event_at: now,
            swipes: 0,
            swipe_counted: false,
        }
    }

    /// Apply one event to a running attempt
    fn advance(&mut self, now: Ticks) -> GestureOutcome {
        if now.elapsed_since(self.started_at) > MAX_PATTERN_PERIOD {
            return GestureOutcome::Abandoned(AbandonReason::PatternTimeout);
        }

        // Gap since the previous event, and swipe length as of that event
        let stopped = now.elapsed_since(self.last_event_at);
        let mut swiping = self.last_event_at.elapsed_since(self.swipe_started_at);
        self.last_event_at = now;

        let mut new_swipe = false;
        if stopped > SINGLE_SWIPE_MAX_INTERVAL {
            if stopped < SWIPE_REST_MIN_PERIOD {
                return GestureOutcome::Abandoned(AbandonReason::RestTooShort(stopped));
            }
            if stopped > SWIPE_REST_MAX_PERIOD {
                return GestureOutcome::Abandoned(AbandonReason::RestTooLong(stopped));
            }

            self.swipe_started_at = now;
            self.swipe_counted = false;
            swiping = Ticks::ZERO;
            new_swipe = true;
        }

        if swiping > SINGLE_SWIPE_MAX_PERIOD {
            return GestureOutcome::Abandoned(AbandonReason::SwipeTooLong);
        }

        if swiping < SINGLE_SWIPE_MIN_PERIOD || self.swipe_counted {
            return if new_swipe {
                GestureOutcome::SwipeStarted(self.swipes + 1)
            } else {
                GestureOutcome::Swiping
            };
        }

        self.swipes += 1;
        self.swipe_counted = true;

        if self.swipes == SWIPES_REQUIRED {
            GestureOutcome::Triggered
        } else {
            debug_assert!(self.swipes < SWIPES_REQUIRED);
            GestureOutcome::SwipeCounted(self.swipes)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No attempt in progress
    Idle,
    Tracking(Pattern),
}

/// Swipe-pattern timer
///
/// Feed it one timestamp per touch interrupt. When the pattern completes it
/// calls [`Terminate::terminate`] on the injected terminator and returns to
/// idle.
#[derive(Debug)]
pub struct GestureTimer<T> {
    terminator: T,
    phase: Phase,
    last_outcome: Option<GestureOutcome>,
}

impl<T: Terminate> GestureTimer<T> {
    /// Create an idle timer
    pub fn new(terminator: T) -> Self {
        Self {
            terminator,
            phase: Phase::Idle,
            last_outcome: None,
        }
    }

    /// Process one input event stamped `now`
    ///
    /// Never blocks and never fails; runs in bounded time.
    pub fn on_input_event(&mut self, now: Ticks) -> GestureOutcome {
        let outcome = match self.phase {
            Phase::Idle => {
                self.phase = Phase::Tracking(Pattern::starting_at(now));
                GestureOutcome::Started
            }
            Phase::Tracking(ref mut pattern) => pattern.advance(now),
        };

        match outcome {
            GestureOutcome::Triggered => {
                self.terminator.terminate();
                self.phase = Phase::Idle;
            }
            GestureOutcome::Abandoned(_) => self.phase = Phase::Idle,
            _ => {}
        }

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Interrupt service entry point
    ///
    /// Samples the clock, runs the state machine, and never claims the
    /// interrupt: other handlers on the line must still see it. The outcome
    /// is kept for [`last_outcome`](Self::last_outcome).
    pub fn on_interrupt<C: MonotonicClock>(&mut self, clock: &C) -> IsrDisposition {
        let now = Ticks(clock.now_ticks());
        self.on_input_event(now);
        IsrDisposition::NotClaimed
    }

    /// Outcome of the most recent event, if any
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    /// Check if no attempt is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Swipes counted in the current attempt (0 when idle)
    pub fn swipes(&self) -> u8 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Tracking(pattern) => pattern.swipes,
        }
    }

    /// Get access to the terminator
    pub fn terminator(&self) -> &T {
        &self.terminator
    }
}
