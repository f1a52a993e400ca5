//! Results of feeding one interrupt to the gesture timer

use crate::time::Ticks;

/// Why an attempt was dropped and the timer went back to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AbandonReason {
    /// The whole pattern took longer than one minute
    PatternTimeout,
    /// Finger lifted and came back before the minimum rest (gap carried)
    RestTooShort(Ticks),
    /// Finger stayed off longer than the maximum rest (gap carried)
    RestTooLong(Ticks),
    /// A single swipe ran past its maximum duration
    SwipeTooLong,
}

/// What a single interrupt did to the gesture timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureOutcome {
    /// First event of a new attempt
    Started,
    /// Event inside the current swipe; nothing to count yet
    Swiping,
    /// A new swipe began after a valid rest (1-based swipe number)
    SwipeStarted(u8),
    /// The current swipe reached its minimum length (swipes so far)
    SwipeCounted(u8),
    /// The final swipe was counted and the fatal stop was invoked
    Triggered,
    /// The attempt was dropped
    Abandoned(AbandonReason),
}

impl GestureOutcome {
    /// Check if this event ended the attempt, either way
    pub fn is_terminal(&self) -> bool {
        matches!(self, GestureOutcome::Triggered | GestureOutcome::Abandoned(_))
    }
}

/// Whether an interrupt handler claimed the interrupt
///
/// Shared interrupt lines are dispatched to every handler in the chain
/// until one claims it. The gesture timer only observes the touch line and
/// always answers [`NotClaimed`](Self::NotClaimed); `Claimed` exists for
/// hosts that chain other handlers behind the same shared-line contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IsrDisposition {
    /// Handled; later handlers on the line may be skipped
    Claimed,
    /// Observed only; dispatch continues to the next handler
    NotClaimed,
}
