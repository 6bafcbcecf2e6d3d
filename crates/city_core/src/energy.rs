//! Energy subsystem and its role-gated wrapper.
//!
//! [`RealEnergySystem`] owns the energy mode. [`EnergyProxy`] owns a real
//! instance exclusively and only forwards mode changes when its [`Role`]
//! allows it. Reports are never gated.

use tracing::{info, warn};

use crate::notice::{Notice, Notifier};
use crate::role::Role;

/// Mode a freshly constructed energy system starts in.
pub const DEFAULT_MODE: &str = "normal";

/// Simulated consumption shown in every report, in kWh per hour.
pub const CONSUMPTION_KWH: u32 = 312;

/// Outcome of an energy mode change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// The new mode is now in effect.
    Applied,
    /// The caller lacked privilege; nothing changed.
    Denied,
}

/// Can report on and set the energy mode.
pub trait EnergySubsystem {
    /// Human-readable report of the current mode and consumption.
    fn report(&self) -> String;

    /// Request a mode change. Any string is accepted verbatim.
    fn set_mode(&mut self, mode: &str) -> ModeChange;

    /// Give up this subsystem, keeping only the real instance behind it.
    ///
    /// Returns `None` for variants not backed by a [`RealEnergySystem`].
    fn take_real(self: Box<Self>) -> Option<RealEnergySystem> {
        None
    }
}

/// The unguarded energy system.
#[derive(Debug)]
pub struct RealEnergySystem {
    mode: String,
    notifier: Notifier,
}

impl RealEnergySystem {
    /// Create an energy system in [`DEFAULT_MODE`].
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            notifier,
        }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Send future notices to `notifier` instead, keeping the mode.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }
}

impl EnergySubsystem for RealEnergySystem {
    fn report(&self) -> String {
        format!(
            "Energy mode: {} | Consumption: {CONSUMPTION_KWH} kWh/h",
            self.mode
        )
    }

    fn set_mode(&mut self, mode: &str) -> ModeChange {
        info!(from = self.mode, to = mode, "energy mode changed");
        self.mode = mode.to_string();
        self.notifier.notify(Notice::EnergyModeChanged {
            mode: self.mode.clone(),
        });
        ModeChange::Applied
    }

    fn take_real(self: Box<Self>) -> Option<RealEnergySystem> {
        Some(*self)
    }
}

/// Role-gated access to a [`RealEnergySystem`].
#[derive(Debug)]
pub struct EnergyProxy {
    role: Role,
    real: RealEnergySystem,
    notifier: Notifier,
}

impl EnergyProxy {
    /// Create a wrapper around a brand-new real energy system.
    #[must_use]
    pub fn new(role: Role, notifier: Notifier) -> Self {
        let real = RealEnergySystem::new(notifier.clone());
        Self::wrap(role, real, notifier)
    }

    /// Create a wrapper around an existing real energy system.
    #[must_use]
    pub fn wrap(role: Role, real: RealEnergySystem, notifier: Notifier) -> Self {
        Self {
            role,
            real,
            notifier,
        }
    }

    /// Returns the role this wrapper acts for.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the current mode of the wrapped system.
    #[must_use]
    pub fn mode(&self) -> &str {
        self.real.mode()
    }
}

impl EnergySubsystem for EnergyProxy {
    fn report(&self) -> String {
        self.real.report()
    }

    fn set_mode(&mut self, mode: &str) -> ModeChange {
        if !self.role.can_change_energy_mode() {
            warn!(role = %self.role, requested = mode, "energy mode change denied");
            self.notifier.notify(Notice::EnergyAccessDenied);
            return ModeChange::Denied;
        }
        self.real.set_mode(mode)
    }

    fn take_real(self: Box<Self>) -> Option<RealEnergySystem> {
        Some(self.real)
    }
}

#[cfg(test)]
mod tests {
    use crate::notice::RecordingSink;

    use super::*;

    fn make_proxy(label: &str) -> (EnergyProxy, RecordingSink) {
        let sink = RecordingSink::new();
        let proxy = EnergyProxy::new(Role::from_label(label), Notifier::new(sink.clone()));
        (proxy, sink)
    }

    #[test]
    fn test_real_defaults_to_normal() {
        let real = RealEnergySystem::new(Notifier::null());
        assert_eq!(real.mode(), DEFAULT_MODE);
        assert_eq!(real.report(), "Energy mode: normal | Consumption: 312 kWh/h");
    }

    #[test]
    fn test_real_accepts_any_mode() {
        let mut real = RealEnergySystem::new(Notifier::null());
        assert_eq!(real.set_mode(""), ModeChange::Applied);
        assert_eq!(real.mode(), "");
        real.set_mode("turbo boost");
        assert_eq!(real.mode(), "turbo boost");
    }

    #[test]
    fn test_guest_cannot_change_mode() {
        let (mut proxy, sink) = make_proxy("guest");
        for mode in ["eco", "max", "", "normal"] {
            assert_eq!(proxy.set_mode(mode), ModeChange::Denied);
            assert_eq!(proxy.mode(), DEFAULT_MODE);
        }
        assert_eq!(sink.notices(), vec![Notice::EnergyAccessDenied; 4]);
        assert!(proxy.report().contains(DEFAULT_MODE));
    }

    #[test]
    fn test_admin_any_casing_changes_mode() {
        let (mut proxy, sink) = make_proxy("Admin");
        assert_eq!(proxy.set_mode("eco"), ModeChange::Applied);
        let report = proxy.report();
        assert!(report.contains("eco"));
        assert!(!report.contains(DEFAULT_MODE));
        assert_eq!(
            sink.notices(),
            vec![Notice::EnergyModeChanged {
                mode: "eco".to_string()
            }]
        );
    }

    #[test]
    fn test_report_unaffected_by_denied_attempts() {
        let (mut admin, _) = make_proxy("admin");
        admin.set_mode("eco");
        let real = Box::new(admin).take_real().unwrap();

        let mut guest = EnergyProxy::wrap(Role::default(), real, Notifier::null());
        guest.set_mode("max");
        assert!(guest.report().contains("eco"));
        assert!(!guest.report().contains("max"));
    }

    #[test]
    fn test_take_real_keeps_state() {
        let (mut proxy, _) = make_proxy("admin");
        proxy.set_mode("max");
        let real = Box::new(proxy).take_real().unwrap();
        assert_eq!(real.mode(), "max");
    }

    #[test]
    fn test_with_notifier_redirects_notices() {
        let (old_sink, new_sink) = (RecordingSink::new(), RecordingSink::new());
        let mut real = RealEnergySystem::new(Notifier::new(old_sink.clone()));
        real.set_mode("eco");
        let mut real = real.with_notifier(Notifier::new(new_sink.clone()));
        assert_eq!(real.mode(), "eco");
        real.set_mode("max");
        assert_eq!(old_sink.len(), 1);
        assert_eq!(
            new_sink.notices(),
            vec![Notice::EnergyModeChanged {
                mode: "max".to_string()
            }]
        );
    }
}
