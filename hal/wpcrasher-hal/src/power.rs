//! Power-setting notifications
//!
//! The host power manager publishes setting changes keyed by GUID. Only the
//! monitor power state is of interest to the crash trigger.

/// Identifier of a power setting (a GUID in its 16-byte wire layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerSettingId(pub [u8; 16]);

impl PowerSettingId {
    /// Build an identifier from the usual GUID fields
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        let a = data1.to_le_bytes();
        let b = data2.to_le_bytes();
        let c = data3.to_le_bytes();
        Self([
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], data4[0], data4[1], data4[2],
            data4[3], data4[4], data4[5], data4[6], data4[7],
        ])
    }
}

/// Monitor power state notification, `02731015-4510-4526-99E6-E5A17EBD1AEA`
///
/// The payload is a little-endian `u32`: `0` for off, `1` for on.
pub const GUID_MONITOR_POWER_ON: PowerSettingId = PowerSettingId::from_fields(
    0x0273_1015,
    0x4510,
    0x4526,
    [0x99, 0xE6, 0xE5, 0xA1, 0x7E, 0xBD, 0x1A, 0xEA],
);

/// Registration of power-setting callbacks with the host
///
/// How the callback itself reaches the core is up to the host shell; this
/// trait only covers the subscription lifetime.
pub trait PowerNotifications {
    /// Opaque registration handle
    type Handle;
    /// Registration failure reported by the host
    type Error;

    /// Subscribe to changes of `setting`
    fn register(&mut self, setting: &PowerSettingId) -> Result<Self::Handle, Self::Error>;

    /// Cancel a subscription obtained from [`register`](Self::register)
    fn unregister(&mut self, handle: Self::Handle);
}
