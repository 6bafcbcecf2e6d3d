//! # city_infra
//!
//! Street hardware for the city control panel.
//!
//! - [`device`] — devices and the factories that produce them.
//! - [`street`] — the [`SmartStreet`] layout and its builder.

pub mod device;
pub mod street;

pub use device::{
    Device, DeviceFactory, DeviceKind, LightingFactory, TransportFactory, UnknownDeviceKind,
    factory_for,
};
pub use street::{SmartStreet, SmartStreetBuilder};
