//! Gesture timing constants
//!
//! The pattern is fixed at compile time: [`SWIPES_REQUIRED`] swipes, each
//! held for 5 to 10 seconds, separated by rests of 5 to 15 seconds, all
//! within one minute.

use crate::time::Ticks;

/// Number of completed swipes that triggers the fatal stop
pub const SWIPES_REQUIRED: u8 = 4;

/// A swipe counts once it has lasted this long
pub const SINGLE_SWIPE_MIN_PERIOD: Ticks = Ticks::from_secs(5);

/// A swipe running longer than this abandons the attempt
pub const SINGLE_SWIPE_MAX_PERIOD: Ticks = Ticks::from_secs(10);

/// Gap between two events above which the finger is considered lifted
pub const SINGLE_SWIPE_MAX_INTERVAL: Ticks = Ticks::from_millis(200);

/// Shortest accepted rest between two swipes
pub const SWIPE_REST_MIN_PERIOD: Ticks = SINGLE_SWIPE_MIN_PERIOD;

/// Longest accepted rest between two swipes
pub const SWIPE_REST_MAX_PERIOD: Ticks = Ticks::from_secs(15);

/// Whole pattern must complete within this period of its first event
pub const MAX_PATTERN_PERIOD: Ticks = Ticks::from_secs(60);
