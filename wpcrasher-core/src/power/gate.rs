//! Power-state gate
//!
//! Runs in the deferred (passive) context that receives power-setting
//! callbacks. It owns only the last acted-upon monitor state and the handle
//! to the interrupt source; it never touches gesture timing, so it can run
//! alongside the interrupt path without a lock.

use core::fmt;

use wpcrasher_hal::{InterruptSource, PowerSettingId, GUID_MONITOR_POWER_ON};

/// Monitor power state as last acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorState {
    /// No notification processed yet
    #[default]
    Unknown,
    /// Display on
    On,
    /// Display off
    Off,
}

impl MonitorState {
    /// Wire value for a monitor that is off
    pub const RAW_OFF: u32 = 0;
    /// Wire value for a monitor that is on
    pub const RAW_ON: u32 = 1;

    /// Decode the notification payload value
    ///
    /// Anything other than [`RAW_ON`](Self::RAW_ON) counts as off.
    pub fn from_raw(raw: u32) -> Self {
        if raw == Self::RAW_ON {
            MonitorState::On
        } else {
            MonitorState::Off
        }
    }

    /// State for a sampled power enable line level
    pub fn from_level(high: bool) -> Self {
        if high {
            MonitorState::On
        } else {
            MonitorState::Off
        }
    }

    /// Wire value to report for this state; `Unknown` reports off
    pub fn to_raw(self) -> u32 {
        match self {
            MonitorState::On => Self::RAW_ON,
            MonitorState::Off | MonitorState::Unknown => Self::RAW_OFF,
        }
    }

    /// Line level that ends this state
    ///
    /// Waiting for this level rather than for an edge completes at once if
    /// the line already moved after it was sampled.
    pub fn change_level(self) -> bool {
        self != MonitorState::On
    }
}

/// Errors reported back to the power manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerGateError {
    /// Missing payload, wrong payload size, or missing context
    InvalidParameter,
}

impl fmt::Display for PowerGateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerGateError::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}

/// What a notification did to the interrupt source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateAction {
    /// Notification for another setting
    Ignored,
    /// Same state as last time, nothing done
    Unchanged,
    /// Interrupt source reported active
    Activated,
    /// Interrupt source reported inactive
    Deactivated,
}

/// Gate enabling the touch interrupt while the display is on
#[derive(Debug)]
pub struct PowerGate<S> {
    source: S,
    last_state: MonitorState,
}

impl<S: InterruptSource> PowerGate<S> {
    /// Create a gate that has not seen any monitor state yet
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_state: MonitorState::Unknown,
        }
    }

    /// Act on a monitor state
    ///
    /// Repeats of the last state are no-ops. `Unknown` is never acted upon.
    pub fn apply(&mut self, state: MonitorState) -> GateAction {
        if state == self.last_state || state == MonitorState::Unknown {
            return GateAction::Unchanged;
        }

        self.last_state = state;

        if state == MonitorState::On {
            self.source.activate();
            GateAction::Activated
        } else {
            self.source.deactivate();
            GateAction::Deactivated
        }
    }

    /// Last monitor state acted upon
    pub fn last_state(&self) -> MonitorState {
        self.last_state
    }

    /// Get access to the interrupt source
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Power-setting callback
///
/// Shaped like the host callback: the setting identifier, the raw payload,
/// and the registration context (the gate). Settings other than
/// [`GUID_MONITOR_POWER_ON`] are ignored. The payload must be exactly one
/// little-endian `u32`.
pub fn on_power_setting_change<S: InterruptSource>(
    setting: &PowerSettingId,
    value: Option<&[u8]>,
    context: Option<&mut PowerGate<S>>,
) -> Result<GateAction, PowerGateError> {
    if *setting != GUID_MONITOR_POWER_ON {
        return Ok(GateAction::Ignored);
    }

    let (Some(value), Some(gate)) = (value, context) else {
        return Err(PowerGateError::InvalidParameter);
    };
    let raw: [u8; 4] = value
        .try_into()
        .map_err(|_| PowerGateError::InvalidParameter)?;

    Ok(gate.apply(MonitorState::from_raw(u32::from_le_bytes(raw))))
}
