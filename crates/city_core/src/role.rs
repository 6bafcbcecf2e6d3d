//! Operator roles.
//!
//! A [`Role`] is a coarse credential, not authentication: any label equal
//! to `"admin"` (ignoring case) is privileged, everything else is not.

use std::fmt;

/// The label that grants administrative privileges.
pub const ADMIN_LABEL: &str = "admin";

/// The role an energy wrapper acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// May change energy settings.
    Admin,
    /// Read-only access. Keeps the label it was created from.
    Restricted(String),
}

impl Role {
    /// Classify a free-text role label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ADMIN_LABEL) {
            Self::Admin
        } else {
            Self::Restricted(label.to_string())
        }
    }

    /// Returns the label this role displays as.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => ADMIN_LABEL,
            Self::Restricted(label) => label,
        }
    }

    /// Whether this role may change the energy mode.
    #[must_use]
    pub fn can_change_energy_mode(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Restricted("guest".to_string())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_any_casing() {
        for label in ["admin", "Admin", "ADMIN", "aDmIn"] {
            assert_eq!(Role::from_label(label), Role::Admin, "{label}");
        }
    }

    #[test]
    fn test_other_labels_restricted() {
        for label in ["guest", "", "administrator", " admin", "root"] {
            let role = Role::from_label(label);
            assert!(!role.can_change_energy_mode(), "{label:?}");
            assert_eq!(role.label(), label);
        }
    }

    #[test]
    fn test_only_admin_may_change_energy() {
        assert!(Role::Admin.can_change_energy_mode());
        assert!(!Role::default().can_change_energy_mode());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::default().to_string(), "guest");
    }
}
