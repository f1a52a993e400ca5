//! Interrupt-time timestamps
//!
//! All timing uses a 64-bit count of 100 ns ticks. Differences are taken
//! with wrapping subtraction: the counter is assumed not to wrap within a
//! gesture attempt (2^64 ticks is tens of thousands of years). A clock that
//! runs backwards shows up as an enormous elapsed time, which every window
//! check rejects.

use core::ops::Add;

use wpcrasher_hal::clock::TICKS_PER_SECOND;

const TICKS_PER_MILLI: u64 = TICKS_PER_SECOND / 1_000;
const TICKS_PER_MICRO: u64 = TICKS_PER_SECOND / 1_000_000;

/// A point in time or a duration, in 100 ns ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticks(pub u64);

impl Ticks {
    /// Zero ticks
    pub const ZERO: Self = Self(0);

    /// Whole seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs * TICKS_PER_SECOND)
    }

    /// Milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * TICKS_PER_MILLI)
    }

    /// Microseconds
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros * TICKS_PER_MICRO)
    }

    /// Raw tick count
    pub const fn as_ticks(self) -> u64 {
        self.0
    }

    /// Whole milliseconds, truncated
    pub const fn as_millis(self) -> u64 {
        self.0 / TICKS_PER_MILLI
    }

    /// Time elapsed from `earlier` to `self`
    pub const fn elapsed_since(self, earlier: Ticks) -> Ticks {
        Ticks(self.0.wrapping_sub(earlier.0))
    }
}

impl Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Ticks {
        Ticks(self.0.wrapping_add(rhs.0))
    }
}
