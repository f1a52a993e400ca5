//! Touch interrupt task
//!
//! Services every delivered touch pulse with the gesture timer and traces
//! what each pulse did.

use defmt::*;
use embassy_rp::gpio::Input;

use wpcrasher_core::{AbandonReason, FatalStopTrigger, GestureOutcome, GestureTimer, Ticks};
use wpcrasher_hal::MonotonicClock;
use wpcrasher_hal_rp2040::{EmbassyClock, ProbeFatalStop, TouchIrq};

/// Gesture timer as wired on this board
pub type TouchTimer = GestureTimer<FatalStopTrigger<ProbeFatalStop>>;

/// Touch task
///
/// Waits for pulses on the IRQ line while the display is on and feeds each
/// one to the gesture timer with the current interrupt time.
#[embassy_executor::task]
pub async fn touch_task(mut irq: TouchIrq<Input<'static>>, mut timer: TouchTimer) {
    info!("Touch task started");

    let clock = EmbassyClock;

    loop {
        if let Err(e) = irq.next_pulse().await {
            match e {}
        }

        let outcome = timer.on_input_event(Ticks(clock.now_ticks()));
        trace_outcome(outcome);
    }
}

fn trace_outcome(outcome: GestureOutcome) {
    match outcome {
        GestureOutcome::Started => info!("Start to log inputs"),
        GestureOutcome::Swiping => {}
        GestureOutcome::SwipeStarted(n) => info!("Start to swipe: {}", n),
        GestureOutcome::SwipeCounted(n) => info!("Number of swipes: {}", n),
        GestureOutcome::Triggered => warn!("Pattern complete, resumed from debug break"),
        GestureOutcome::Abandoned(AbandonReason::PatternTimeout) => {
            warn!("Total input time longer than 60 s, restart")
        }
        GestureOutcome::Abandoned(AbandonReason::RestTooShort(gap))
        | GestureOutcome::Abandoned(AbandonReason::RestTooLong(gap)) => {
            warn!("Stopped time: {} ms, restart", gap.as_millis())
        }
        GestureOutcome::Abandoned(AbandonReason::SwipeTooLong) => {
            warn!("Swipe time longer than 10 s, restart")
        }
    }
}
