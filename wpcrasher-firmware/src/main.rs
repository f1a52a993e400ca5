//! WpCrasher - on-demand crash trigger
//!
//! Firmware binary for RP2040 boards with a touch controller. Watches the
//! touch IRQ line for the swipe pattern and stops the system when it
//! completes, so the crash-dump path can be exercised from the screen.
//!
//! Usage: swipe for about 7 seconds, rest for about 7 seconds, and repeat.
//! The fourth swipe stops the board. With the `probe-break` feature the
//! board breaks into the debug probe instead.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use wpcrasher_core::DeviceSession;
use wpcrasher_hal_rp2040::{ProbeFatalStop, TouchIrq};

mod board;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("WpCrasher firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = board::Board::new(p);
    info!("Peripherals initialized");

    let probe_attached = cfg!(feature = "probe-break");
    if probe_attached {
        info!("Pattern completion breaks into the debug probe");
    }

    // One session per device; each half goes to the context that owns it
    let session = DeviceSession::new(
        channels::TOUCH_LINE.control(),
        ProbeFatalStop::new(probe_attached),
    );
    let (gesture, gate) = session.into_parts();
    let touch_irq = TouchIrq::new(board.touch_irq, &channels::TOUCH_LINE);

    spawner.spawn(tasks::touch_task(touch_irq, gesture)).unwrap();
    spawner.spawn(tasks::power_task(board.display_power, gate)).unwrap();

    info!("All tasks spawned, waiting for touch input");
}
