//! Display power task
//!
//! Samples the display power enable line and delivers it as a monitor
//! power-setting notification to the power gate, which switches touch
//! interrupt delivery.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use wpcrasher_core::{
    on_power_setting_change, GateAction, MonitorState, PowerGate, PowerSubscription,
};
use wpcrasher_hal::GUID_MONITOR_POWER_ON;
use wpcrasher_hal_rp2040::TouchLineControl;

use crate::channels::DISPLAY_POWER;

/// Settle time after an edge on the power enable line
const DEBOUNCE_MS: u64 = 20;

/// Power task
#[embassy_executor::task]
pub async fn power_task(
    mut display_power: Input<'static>,
    mut gate: PowerGate<TouchLineControl>,
) {
    info!("Power task started");

    // Held for the life of the task; dropping it unregisters
    let _subscription = match PowerSubscription::register(&DISPLAY_POWER) {
        Ok(subscription) => subscription,
        Err(e) => {
            error!("Monitor power registration failed: {}", e);
            return;
        }
    };

    loop {
        let state = MonitorState::from_level(display_power.is_high());
        let payload = state.to_raw().to_le_bytes();

        let result =
            on_power_setting_change(&GUID_MONITOR_POWER_ON, Some(&payload), Some(&mut gate));

        match result {
            Ok(GateAction::Activated) => info!("Display on, touch interrupt active"),
            Ok(GateAction::Deactivated) => info!("Display off, touch interrupt inactive"),
            Ok(_) => {}
            Err(e) => warn!("Power notification rejected: {}", e),
        }

        // Level wait: a change since the sample above completes at once
        if state.change_level() {
            display_power.wait_for_high().await;
        } else {
            display_power.wait_for_low().await;
        }
        Timer::after_millis(DEBOUNCE_MS).await;
    }
}
