//! Subsystem capability traits and the registry entry type.
//!
//! Each subsystem variant implements the capability its high-level
//! operation needs. The registry stores them as a [`Subsystem`], a tagged
//! union over those capabilities, so lookups resolve to the right trait
//! object or to nothing at all.

use std::fmt;

use crate::command::{Command, with_logging};
use crate::energy::EnergySubsystem;
use crate::notice::{Notice, Notifier};

/// Can switch on every municipal light.
pub trait LightingSubsystem {
    /// Turn on all lights.
    fn turn_on_all(&self);
}

/// Can halt all transport at once.
pub trait TransportSubsystem {
    /// Stop all traffic immediately.
    fn emergency_stop(&self);
}

/// A registry entry: one subsystem behind the capability it provides.
pub enum Subsystem {
    /// Lighting capability.
    Lighting(Box<dyn LightingSubsystem>),
    /// Transport capability.
    Transport(Box<dyn TransportSubsystem>),
    /// Energy capability (usually a role-gated wrapper).
    Energy(Box<dyn EnergySubsystem>),
}

impl Subsystem {
    /// Box a lighting subsystem into a registry entry.
    #[must_use]
    pub fn lighting(subsystem: impl LightingSubsystem + 'static) -> Self {
        Self::Lighting(Box::new(subsystem))
    }

    /// Box a transport subsystem into a registry entry.
    #[must_use]
    pub fn transport(subsystem: impl TransportSubsystem + 'static) -> Self {
        Self::Transport(Box::new(subsystem))
    }

    /// Box an energy subsystem into a registry entry.
    #[must_use]
    pub fn energy(subsystem: impl EnergySubsystem + 'static) -> Self {
        Self::Energy(Box::new(subsystem))
    }

    /// Short name of the capability this entry provides.
    #[must_use]
    pub fn capability(&self) -> &'static str {
        match self {
            Self::Lighting(_) => "lighting",
            Self::Transport(_) => "transport",
            Self::Energy(_) => "energy",
        }
    }
}

impl fmt::Debug for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subsystem").field(&self.capability()).finish()
    }
}

/// Street lighting driven by a single switch-on command.
pub struct LightingGrid {
    switch_on: Command,
}

impl LightingGrid {
    /// Display name used when announcing the switch-on command.
    pub const COMMAND_NAME: &'static str = "turnOnAllLights";

    /// Lighting whose switch-on is announced through the logging decorator
    /// and then reports [`Notice::LightsOn`].
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        let inner = notifier.clone();
        Self::from_command(with_logging(
            move || inner.notify(Notice::LightsOn),
            Self::COMMAND_NAME,
            notifier,
        ))
    }

    /// Lighting that runs an arbitrary command to switch on.
    #[must_use]
    pub fn from_command(switch_on: Command) -> Self {
        Self { switch_on }
    }
}

impl LightingSubsystem for LightingGrid {
    fn turn_on_all(&self) {
        (self.switch_on)();
    }
}

/// Transport network driven by a single emergency-stop command.
pub struct TransportNetwork {
    stop: Command,
}

impl TransportNetwork {
    /// Display name used when announcing the stop command.
    pub const COMMAND_NAME: &'static str = "emergencyStop";

    /// Transport whose stop is announced through the logging decorator and
    /// then reports [`Notice::TrafficStopped`].
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        let inner = notifier.clone();
        Self::from_command(with_logging(
            move || inner.notify(Notice::TrafficStopped),
            Self::COMMAND_NAME,
            notifier,
        ))
    }

    /// Transport that runs an arbitrary command to stop.
    #[must_use]
    pub fn from_command(stop: Command) -> Self {
        Self { stop }
    }
}

impl TransportSubsystem for TransportNetwork {
    fn emergency_stop(&self) {
        (self.stop)();
    }
}
