//! # city_core
//!
//! Subsystem registry and command dispatch for the city control panel.
//!
//! This crate provides:
//!
//! - [`notice`] — user-facing notices and the sinks that receive them.
//! - [`command`] — zero-argument commands and the logging decorator.
//! - [`role`] — operator roles and the energy authorization predicate.
//! - [`subsystem`] — capability traits and the lighting/transport variants.
//! - [`energy`] — the real energy subsystem and its role-gated wrapper.
//! - [`controller`] — the [`CityController`] registry that forwards
//!   high-level operations to subsystems by name.
//!
//! ## Usage
//!
//! ```rust
//! use city_core::{CityController, EnergyProxy, Notifier, RecordingSink, Role, Subsystem};
//!
//! let sink = RecordingSink::new();
//! let notifier = Notifier::new(sink.clone());
//!
//! let mut controller = CityController::new();
//! controller.register(
//!     "energy",
//!     Subsystem::energy(EnergyProxy::new(Role::from_label("guest"), notifier)),
//! );
//!
//! controller.set_energy_mode("max");
//! assert!(controller.energy_report().contains("normal"));
//! ```

pub mod command;
pub mod controller;
pub mod energy;
pub mod notice;
pub mod role;
pub mod subsystem;

pub use command::{Command, with_logging};
pub use controller::{
    CityController, ENERGY, ENERGY_NOT_FOUND, EscalationPolicy, LIGHTING, TRANSPORT, UnknownPolicy,
};
pub use energy::{EnergyProxy, EnergySubsystem, ModeChange, RealEnergySystem};
pub use notice::{ConsoleSink, Notice, NoticeSink, Notifier, NullSink, RecordingSink};
pub use role::Role;
pub use subsystem::{
    LightingGrid, LightingSubsystem, Subsystem, TransportNetwork, TransportSubsystem,
};
