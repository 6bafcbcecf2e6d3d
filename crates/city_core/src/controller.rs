//! City controller — the registry of named subsystems.
//!
//! The driver constructs exactly one [`CityController`], registers its
//! subsystems under well-known names and then issues high-level commands.
//! Each command resolves a name to the capability it needs and forwards the
//! call. A missing or differently-capable entry is never an error: lighting
//! and transport commands become no-ops and the energy report falls back to
//! [`ENERGY_NOT_FOUND`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::energy::{EnergyProxy, EnergySubsystem, ModeChange, RealEnergySystem};
use crate::notice::Notifier;
use crate::role::Role;
use crate::subsystem::{LightingSubsystem, Subsystem, TransportSubsystem};

/// Registry name of the lighting subsystem.
pub const LIGHTING: &str = "lighting";
/// Registry name of the transport subsystem.
pub const TRANSPORT: &str = "transport";
/// Registry name of the energy subsystem.
pub const ENERGY: &str = "energy";

/// Report returned when no energy subsystem is registered.
pub const ENERGY_NOT_FOUND: &str = "Energy subsystem not found";

/// What happens to the current energy state when a new role takes over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EscalationPolicy {
    /// Start over with a fresh energy system in its default mode.
    #[default]
    Reset,
    /// Move the existing energy system behind the new wrapper.
    Preserve,
}

impl EscalationPolicy {
    /// Returns the lowercase name of this policy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Preserve => "preserve",
        }
    }
}

impl fmt::Display for EscalationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy name other than `reset` or `preserve`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown escalation policy {0:?} (expected \"reset\" or \"preserve\")")]
pub struct UnknownPolicy(pub String);

impl TryFrom<String> for EscalationPolicy {
    type Error = UnknownPolicy;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for EscalationPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "preserve" => Ok(Self::Preserve),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Registry of subsystems keyed by name.
#[derive(Debug, Default)]
pub struct CityController {
    /// Subsystems keyed by name. Last registration wins.
    subsystems: HashMap<String, Subsystem>,
}

impl CityController {
    /// Create a new empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subsystems: HashMap::new(),
        }
    }

    /// Register a subsystem, silently replacing any entry with the same name.
    pub fn register(&mut self, name: impl Into<String>, subsystem: Subsystem) {
        let name = name.into();
        let capability = subsystem.capability();
        match self.subsystems.insert(name.clone(), subsystem) {
            Some(previous) => info!(
                name,
                capability,
                replaced = previous.capability(),
                "subsystem replaced"
            ),
            None => info!(name, capability, "subsystem registered"),
        }
    }

    /// Returns the entry registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Subsystem> {
        self.subsystems.get(name)
    }

    /// Returns `true` if something is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.subsystems.contains_key(name)
    }

    /// Returns the number of registered subsystems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subsystems.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty()
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.subsystems.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the lighting subsystem registered under `name`, if that entry
    /// has the lighting capability.
    #[must_use]
    pub fn lighting(&self, name: &str) -> Option<&dyn LightingSubsystem> {
        match self.subsystems.get(name)? {
            Subsystem::Lighting(lighting) => Some(lighting.as_ref()),
            _ => None,
        }
    }

    /// Returns the transport subsystem registered under `name`, if that
    /// entry has the transport capability.
    #[must_use]
    pub fn transport(&self, name: &str) -> Option<&dyn TransportSubsystem> {
        match self.subsystems.get(name)? {
            Subsystem::Transport(transport) => Some(transport.as_ref()),
            _ => None,
        }
    }

    /// Returns the energy subsystem registered under `name`, if that entry
    /// has the energy capability.
    #[must_use]
    pub fn energy(&self, name: &str) -> Option<&dyn EnergySubsystem> {
        match self.subsystems.get(name)? {
            Subsystem::Energy(energy) => Some(energy.as_ref()),
            _ => None,
        }
    }

    /// Mutable variant of [`CityController::energy`].
    pub fn energy_mut(&mut self, name: &str) -> Option<&mut dyn EnergySubsystem> {
        let Some(Subsystem::Energy(energy)) = self.subsystems.get_mut(name) else {
            return None;
        };
        let energy: &mut dyn EnergySubsystem = energy.as_mut();
        Some(energy)
    }

    /// Switch on every light, if a lighting subsystem is registered.
    pub fn turn_on_all_lights(&self) {
        match self.lighting(LIGHTING) {
            Some(lighting) => lighting.turn_on_all(),
            None => debug!(name = LIGHTING, "no lighting subsystem, ignoring"),
        }
    }

    /// Halt all traffic, if a transport subsystem is registered.
    pub fn emergency_stop_traffic(&self) {
        match self.transport(TRANSPORT) {
            Some(transport) => transport.emergency_stop(),
            None => debug!(name = TRANSPORT, "no transport subsystem, ignoring"),
        }
    }

    /// Returns the energy report, or [`ENERGY_NOT_FOUND`].
    #[must_use]
    pub fn energy_report(&self) -> String {
        self.energy(ENERGY)
            .map_or_else(|| ENERGY_NOT_FOUND.to_string(), |energy| energy.report())
    }

    /// Forward a mode change to the energy subsystem.
    ///
    /// Returns `None` if no energy subsystem is registered.
    pub fn set_energy_mode(&mut self, mode: &str) -> Option<ModeChange> {
        let Some(energy) = self.energy_mut(ENERGY) else {
            debug!(name = ENERGY, "no energy subsystem, ignoring");
            return None;
        };
        Some(energy.set_mode(mode))
    }

    /// Replace the energy entry with a new wrapper acting for `role`.
    ///
    /// Under [`EscalationPolicy::Preserve`] the real system behind the
    /// current entry moves into the new wrapper and reports through
    /// `notifier` from then on. Otherwise, or if the current entry is
    /// missing or not backed by a [`RealEnergySystem`], the wrapper gets a
    /// fresh real system.
    pub fn escalate_energy(&mut self, role: Role, policy: EscalationPolicy, notifier: Notifier) {
        let existing = match self.subsystems.remove(ENERGY) {
            Some(Subsystem::Energy(energy)) => Some(energy),
            _ => None,
        };

        let preserved = match (policy, existing) {
            (EscalationPolicy::Preserve, Some(energy)) => {
                let real = energy.take_real();
                if real.is_none() {
                    warn!(
                        name = ENERGY,
                        "energy entry has no real system to preserve, starting fresh"
                    );
                }
                real
            }
            _ => None,
        };
        let real = match preserved {
            Some(real) => real.with_notifier(notifier.clone()),
            None => RealEnergySystem::new(notifier.clone()),
        };

        info!(role = %role, ?policy, mode = real.mode(), "energy role escalated");
        self.register(ENERGY, Subsystem::energy(EnergyProxy::wrap(role, real, notifier)));
    }
}
