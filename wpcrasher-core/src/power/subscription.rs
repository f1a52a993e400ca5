//! Monitor power notification subscription

use wpcrasher_hal::{PowerNotifications, GUID_MONITOR_POWER_ON};

/// Registration for monitor power-state notifications
///
/// Registers on creation and unregisters exactly once, either explicitly or
/// when dropped with the device.
pub struct PowerSubscription<R: PowerNotifications> {
    registrar: R,
    handle: Option<R::Handle>,
}

impl<R: PowerNotifications> PowerSubscription<R> {
    /// Subscribe to [`GUID_MONITOR_POWER_ON`]
    pub fn register(mut registrar: R) -> Result<Self, R::Error> {
        let handle = registrar.register(&GUID_MONITOR_POWER_ON)?;
        Ok(Self {
            registrar,
            handle: Some(handle),
        })
    }

    /// Check if the subscription is still registered
    pub fn is_registered(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the subscription; later calls do nothing
    pub fn unregister(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.registrar.unregister(handle);
        }
    }
}

impl<R: PowerNotifications> Drop for PowerSubscription<R> {
    fn drop(&mut self) {
        self.unregister();
    }
}
