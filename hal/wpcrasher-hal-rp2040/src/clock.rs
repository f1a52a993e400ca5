//! Monotonic clock backed by the Embassy time driver
//!
//! The RP2040 timer counts microseconds from boot and never jumps, which
//! makes it a suitable unbiased interrupt-time source.

use embassy_time::Instant;
use wpcrasher_hal::MonotonicClock;

/// 100 ns ticks per microsecond
const TICKS_PER_MICRO: u64 = 10;

/// Clock reading `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_ticks(&self) -> u64 {
        Instant::now().as_micros().wrapping_mul(TICKS_PER_MICRO)
    }
}
