//! Display power notification publisher
//!
//! On this board the display's power enable line stands in for the host
//! power manager. The publisher tracks whether anyone subscribed to the
//! monitor power setting. The power task holds the only subscription for
//! its whole life, so it delivers notifications unconditionally.

use core::fmt;

use portable_atomic::{AtomicBool, Ordering};
use wpcrasher_hal::{PowerNotifications, PowerSettingId, GUID_MONITOR_POWER_ON};

/// Registration failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PublisherError {
    /// This board only publishes the monitor power setting
    UnsupportedSetting,
    /// The setting already has a subscriber
    AlreadyRegistered,
}

impl fmt::Display for PublisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublisherError::UnsupportedSetting => write!(f, "unsupported power setting"),
            PublisherError::AlreadyRegistered => write!(f, "power setting already registered"),
        }
    }
}

/// Publisher of the display power state
pub struct DisplayPowerPublisher {
    subscribed: AtomicBool,
}

impl Default for DisplayPowerPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPowerPublisher {
    /// Create a publisher with no subscriber
    pub const fn new() -> Self {
        Self {
            subscribed: AtomicBool::new(false),
        }
    }
}

impl PowerNotifications for &DisplayPowerPublisher {
    type Handle = PowerSettingId;
    type Error = PublisherError;

    fn register(&mut self, setting: &PowerSettingId) -> Result<PowerSettingId, PublisherError> {
        if *setting != GUID_MONITOR_POWER_ON {
            return Err(PublisherError::UnsupportedSetting);
        }
        if self.subscribed.swap(true, Ordering::AcqRel) {
            return Err(PublisherError::AlreadyRegistered);
        }
        Ok(*setting)
    }

    fn unregister(&mut self, _handle: PowerSettingId) {
        self.subscribed.store(false, Ordering::Release);
    }
}
