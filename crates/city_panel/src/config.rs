//! Control panel configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the stock panel: a guest energy role, a 600 ms pause after each
//! command and the 35/12/20 main street.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use city_core::{EscalationPolicy, Role};
use city_infra::{SmartStreet, SmartStreetBuilder};

use crate::error::PanelError;

/// Default pause after each command, in milliseconds.
pub const DEFAULT_PAUSE_MS: u64 = 600;

/// Equipment counts for the main street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreetLayout {
    /// Number of street lamps.
    pub lamps: u32,
    /// Number of surveillance cameras.
    pub cameras: u32,
    /// Number of solar panels.
    pub solar_panels: u32,
}

impl Default for StreetLayout {
    fn default() -> Self {
        Self {
            lamps: 35,
            cameras: 12,
            solar_panels: 20,
        }
    }
}

impl StreetLayout {
    /// Build the street this layout describes.
    #[must_use]
    pub fn build(&self) -> SmartStreet {
        SmartStreetBuilder::new()
            .lamps(self.lamps)
            .cameras(self.cameras)
            .solar_panels(self.solar_panels)
            .build()
    }
}

/// Configuration for the control panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Pause after each command, in milliseconds (0 disables it).
    pub pause_ms: u64,
    /// Role label the energy subsystem starts with.
    pub initial_role: String,
    /// What switching to admin does to the current energy mode.
    pub escalation: EscalationPolicy,
    /// Main street equipment.
    pub street: StreetLayout,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            pause_ms: DEFAULT_PAUSE_MS,
            initial_role: Role::default().label().to_string(),
            escalation: EscalationPolicy::default(),
            street: StreetLayout::default(),
        }
    }
}

impl PanelConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ConfigRead`] if the file cannot be read and
    /// [`PanelError::ConfigParse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, PanelError> {
        let text = std::fs::read_to_string(path).map_err(|source| PanelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ConfigParse`] on malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Override the post-command pause.
    #[must_use]
    pub fn with_pause_ms(mut self, pause_ms: u64) -> Self {
        self.pause_ms = pause_ms;
        self
    }

    /// Override the initial energy role.
    #[must_use]
    pub fn with_initial_role(mut self, role: impl Into<String>) -> Self {
        self.initial_role = role.into();
        self
    }

    /// Override the escalation policy.
    #[must_use]
    pub fn with_escalation(mut self, escalation: EscalationPolicy) -> Self {
        self.escalation = escalation;
        self
    }

    /// The post-command pause as a [`Duration`].
    #[must_use]
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// The role the energy subsystem starts with.
    #[must_use]
    pub fn initial_role(&self) -> Role {
        Role::from_label(&self.initial_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.pause(), Duration::from_millis(600));
        assert_eq!(config.initial_role(), Role::from_label("guest"));
        assert_eq!(config.escalation, EscalationPolicy::Reset);
        assert_eq!(
            config.street.build().info(),
            "Lamps: 35 | Cameras: 12 | Solar panels: 20"
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PanelConfig::from_json("{}").unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = PanelConfig::from_json(
            r#"{ "pause_ms": 0, "escalation": "preserve", "street": { "lamps": 3 } }"#,
        )
        .unwrap();
        assert_eq!(config.pause_ms, 0);
        assert_eq!(config.escalation, EscalationPolicy::Preserve);
        assert_eq!(config.street.lamps, 3);
        assert_eq!(config.street.cameras, 12);
        assert_eq!(config.initial_role, "guest");
    }

    #[test]
    fn test_escalation_any_casing() {
        let config = PanelConfig::from_json(r#"{ "escalation": "Preserve" }"#).unwrap();
        assert_eq!(config.escalation, EscalationPolicy::Preserve);
        let config = PanelConfig::from_json(r#"{ "escalation": "RESET" }"#).unwrap();
        assert_eq!(config.escalation, EscalationPolicy::Reset);
    }

    #[test]
    fn test_unknown_escalation_rejected() {
        let err = PanelConfig::from_json(r#"{ "escalation": "keep" }"#).unwrap_err();
        assert!(matches!(err, PanelError::ConfigParse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = PanelConfig::from_json(r#"{ "pause": 10 }"#).unwrap_err();
        assert!(matches!(err, PanelError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PanelConfig::load(Path::new("/nonexistent/city_panel.json")).unwrap_err();
        assert!(matches!(err, PanelError::ConfigRead { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = PanelConfig::default()
            .with_pause_ms(5)
            .with_initial_role("ADMIN")
            .with_escalation(EscalationPolicy::Preserve);
        assert_eq!(config.pause(), Duration::from_millis(5));
        assert_eq!(config.initial_role(), Role::Admin);
        assert_eq!(config.escalation, EscalationPolicy::Preserve);
    }
}
