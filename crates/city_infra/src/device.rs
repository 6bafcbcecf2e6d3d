//! Devices and device factories.
//!
//! Each subsystem family has a [`DeviceFactory`] that knows which device a
//! street should receive. [`factory_for`] picks the factory for a
//! [`DeviceKind`].

use std::fmt;
use std::str::FromStr;

/// A piece of street hardware and its current status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Product name (e.g. `"Smart Lamp"`).
    pub name: String,
    /// Human-readable status.
    pub status: String,
}

impl Device {
    /// Create a new device.
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.status)
    }
}

/// Produces the device for one subsystem family.
pub trait DeviceFactory {
    /// Build a new device.
    fn create_device(&self) -> Device;
}

/// Factory for lighting hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightingFactory;

impl DeviceFactory for LightingFactory {
    fn create_device(&self) -> Device {
        Device::new("Smart Lamp", "On - 90% brightness")
    }
}

/// Factory for transport hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransportFactory;

impl DeviceFactory for TransportFactory {
    fn create_device(&self) -> Device {
        Device::new("Smart Traffic Light", "GREEN - traffic allowed")
    }
}

/// The subsystem families that have device factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Street lighting.
    Lighting,
    /// Traffic control.
    Transport,
}

impl DeviceKind {
    /// Every kind, in catalogue order.
    pub const ALL: [Self; 2] = [Self::Lighting, Self::Transport];

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lighting => "lighting",
            Self::Transport => "transport",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device kind name that no factory handles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind: {0:?}")]
pub struct UnknownDeviceKind(pub String);

impl FromStr for DeviceKind {
    type Err = UnknownDeviceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lighting" => Ok(Self::Lighting),
            "transport" => Ok(Self::Transport),
            other => Err(UnknownDeviceKind(other.to_string())),
        }
    }
}

/// Returns the factory for a device kind.
#[must_use]
pub fn factory_for(kind: DeviceKind) -> Box<dyn DeviceFactory> {
    match kind {
        DeviceKind::Lighting => Box::new(LightingFactory),
        DeviceKind::Transport => Box::new(TransportFactory),
    }
}
