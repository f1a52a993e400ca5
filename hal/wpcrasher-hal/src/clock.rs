//! Monotonic time source

/// Number of clock ticks in one second (100 ns resolution)
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// Unbiased monotonic clock
///
/// Reports time in 100 ns ticks since an arbitrary epoch. The value must not
/// jump with wall-clock adjustments and must keep counting across the whole
/// lifetime of a gesture attempt.
pub trait MonotonicClock {
    /// Current time in 100 ns ticks
    fn now_ticks(&self) -> u64;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ticks(&self) -> u64 {
        (**self).now_ticks()
    }
}
