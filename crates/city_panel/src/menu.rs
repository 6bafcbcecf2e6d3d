//! Menu options and their rendering.

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::PanelError;

/// Width of the rules framing the menu.
pub const MENU_WIDTH: usize = 40;

/// One selectable menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TurnOnLights,
    EmergencyStop,
    EnergyReport,
    SwitchToAdmin,
    StreetInfo,
    ChangeEnergyMode,
    DeviceCatalogue,
    Exit,
}

impl MenuChoice {
    /// Options in the order they are listed, with exit last.
    pub const ALL: [Self; 8] = [
        Self::TurnOnLights,
        Self::EmergencyStop,
        Self::EnergyReport,
        Self::SwitchToAdmin,
        Self::StreetInfo,
        Self::ChangeEnergyMode,
        Self::DeviceCatalogue,
        Self::Exit,
    ];

    /// The key the operator types to select this option.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TurnOnLights => "1",
            Self::EmergencyStop => "2",
            Self::EnergyReport => "3",
            Self::SwitchToAdmin => "4",
            Self::StreetInfo => "5",
            Self::ChangeEnergyMode => "6",
            Self::DeviceCatalogue => "7",
            Self::Exit => "0",
        }
    }

    /// Menu line text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TurnOnLights => "Turn on all lights",
            Self::EmergencyStop => "Emergency transport stop",
            Self::EnergyReport => "Energy report",
            Self::SwitchToAdmin => "Switch to admin mode",
            Self::StreetInfo => "Smart street info",
            Self::ChangeEnergyMode => "Change energy mode (eco / max)",
            Self::DeviceCatalogue => "Device catalogue",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == key)
            .ok_or_else(|| PanelError::UnknownChoice(key.to_string()))
    }
}

/// Write the full menu followed by the selection prompt.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    writeln!(out, "     SMART CITY CONTROL PANEL")?;
    writeln!(out, "{}", "=".repeat(MENU_WIDTH))?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    writeln!(out, "{}", "-".repeat(MENU_WIDTH))?;
    write!(out, "Your choice: ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_key() {
        for choice in MenuChoice::ALL {
            assert_eq!(choice.key().parse::<MenuChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(" 3 \n".parse::<MenuChoice>().unwrap(), MenuChoice::EnergyReport);
    }

    #[test]
    fn test_parse_unknown() {
        for input in ["", "8", "one", "1 2"] {
            let err = input.parse::<MenuChoice>().unwrap_err();
            assert!(matches!(err, PanelError::UnknownChoice(_)), "{input:?}");
        }
    }

    #[test]
    fn test_render_lists_all_options() {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("SMART CITY CONTROL PANEL"));
        assert!(text.contains("1. Turn on all lights"));
        assert!(text.contains("0. Exit"));
        assert!(text.ends_with("Your choice: "));
    }
}
