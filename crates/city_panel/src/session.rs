//! Interactive session — the menu loop driving the controller.
//!
//! The session owns the one [`CityController`] for the process. It reads a
//! choice per line, runs it to completion, pauses, and repeats until the
//! operator exits or input ends.

use std::io::{BufRead, Write};
use std::thread;

use tracing::{debug, info, warn};

use city_core::{
    CityController, ENERGY, EnergyProxy, LIGHTING, LightingGrid, Notifier, Role, Subsystem,
    TRANSPORT, TransportNetwork,
};
use city_infra::{DeviceKind, SmartStreet, factory_for};

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::menu::{self, MenuChoice};

pub const BANNER: &str = "SmartCity system started!";
pub const GOODBYE: &str = "SmartCity shut down. Goodbye!";
pub const ADMIN_ENABLED: &str = "ADMIN mode enabled! You can now change energy settings";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const MODE_PROMPT: &str = "New mode (eco / max): ";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A control panel session over arbitrary line input and text output.
pub struct Session<R, W> {
    controller: CityController,
    notifier: Notifier,
    config: PanelConfig,
    street: SmartStreet,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build the controller, register the stock subsystems and prepare the
    /// configured street.
    #[must_use]
    pub fn new(config: PanelConfig, notifier: Notifier, input: R, output: W) -> Self {
        let mut controller = CityController::new();
        controller.register(LIGHTING, Subsystem::lighting(LightingGrid::new(notifier.clone())));
        controller.register(
            TRANSPORT,
            Subsystem::transport(TransportNetwork::new(notifier.clone())),
        );
        controller.register(
            ENERGY,
            Subsystem::energy(EnergyProxy::new(config.initial_role(), notifier.clone())),
        );

        let street = config.street.build();
        info!(street = street.info(), "main street built");

        Self {
            controller,
            notifier,
            config,
            street,
            input,
            output,
        }
    }

    /// Returns the controller.
    #[must_use]
    pub fn controller(&self) -> &CityController {
        &self.controller
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Io`] if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), PanelError> {
        writeln!(self.output, "\n\n{BANNER}\n")?;

        loop {
            menu::render(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                debug!("input closed");
                self.handle(MenuChoice::Exit)?;
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.handle(choice)?,
                Err(err) => {
                    debug!(%err, "rejected menu input");
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
            };

            self.output.flush()?;
            self.pause();
            if flow == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Execute one menu choice.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Io`] if reading input or writing output fails.
    pub fn handle(&mut self, choice: MenuChoice) -> Result<Flow, PanelError> {
        debug!(?choice, "handling menu choice");
        match choice {
            MenuChoice::TurnOnLights => self.controller.turn_on_all_lights(),
            MenuChoice::EmergencyStop => self.controller.emergency_stop_traffic(),
            MenuChoice::EnergyReport => {
                writeln!(self.output, "{}", self.controller.energy_report())?;
            }
            MenuChoice::SwitchToAdmin => {
                self.controller.escalate_energy(
                    Role::Admin,
                    self.config.escalation,
                    self.notifier.clone(),
                );
                writeln!(self.output, "{ADMIN_ENABLED}")?;
            }
            MenuChoice::StreetInfo => writeln!(self.output, "{}", self.street.info())?,
            MenuChoice::ChangeEnergyMode => {
                write!(self.output, "{MODE_PROMPT}")?;
                self.output.flush()?;
                let Some(mode) = self.read_line()? else {
                    return self.handle(MenuChoice::Exit);
                };
                if self.controller.set_energy_mode(&mode).is_none() {
                    warn!(mode, "no energy subsystem registered");
                }
            }
            MenuChoice::DeviceCatalogue => {
                for kind in DeviceKind::ALL {
                    let device = factory_for(kind).create_device();
                    writeln!(self.output, "{kind}: {device}")?;
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "\n{GOODBYE}")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Read one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PanelError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pause(&self) {
        let pause = self.config.pause();
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use city_core::{EscalationPolicy, Notice, RecordingSink};

    use super::*;

    fn make_session(
        input: &str,
        config: PanelConfig,
    ) -> (Session<Cursor<Vec<u8>>, Vec<u8>>, RecordingSink) {
        let sink = RecordingSink::new();
        let session = Session::new(
            config.with_pause_ms(0),
            Notifier::new(sink.clone()),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        (session, sink)
    }

    fn run(input: &str, config: PanelConfig) -> (String, Vec<Notice>, String) {
        let (mut session, sink) = make_session(input, config);
        session.run().unwrap();
        let output = String::from_utf8(session.output.clone()).unwrap();
        let report = session.controller().energy_report();
        (output, sink.notices(), report)
    }

    #[test]
    fn test_registers_stock_subsystems() {
        let (session, sink) = make_session("", PanelConfig::default());
        assert_eq!(session.controller().names(), vec![ENERGY, LIGHTING, TRANSPORT]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_exit_immediately() {
        let (output, notices, _) = run("0\n", PanelConfig::default());
        assert!(output.contains(BANNER));
        assert!(output.contains(GOODBYE));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _, _) = run("", PanelConfig::default());
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_lights_and_transport() {
        let (_, notices, _) = run("1\n2\n0\n", PanelConfig::default());
        assert_eq!(
            notices,
            vec![
                Notice::CommandStarted {
                    name: LightingGrid::COMMAND_NAME.to_string()
                },
                Notice::LightsOn,
                Notice::CommandStarted {
                    name: TransportNetwork::COMMAND_NAME.to_string()
                },
                Notice::TrafficStopped,
            ]
        );
    }

    #[test]
    fn test_invalid_choice_continues() {
        let (output, _, _) = run("9\n3\n0\n", PanelConfig::default());
        assert!(output.contains(INVALID_CHOICE));
        assert!(output.contains("Energy mode: normal | Consumption: 312 kWh/h"));
    }

    #[test]
    fn test_guest_then_admin_changes_mode() {
        let (output, notices, report) = run("6\nmax\n3\n4\n6\nmax\n3\n0\n", PanelConfig::default());
        assert!(output.contains("Energy mode: normal"));
        assert!(output.contains(ADMIN_ENABLED));
        assert_eq!(report, "Energy mode: max | Consumption: 312 kWh/h");
        assert_eq!(
            notices,
            vec![
                Notice::EnergyAccessDenied,
                Notice::EnergyModeChanged {
                    mode: "max".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reescalation_resets_by_default() {
        let (_, _, report) = run("4\n6\neco\n4\n0\n", PanelConfig::default());
        assert!(report.contains("normal"));
    }

    #[test]
    fn test_reescalation_preserves_when_configured() {
        let config = PanelConfig::default().with_escalation(EscalationPolicy::Preserve);
        let (_, _, report) = run("4\n6\neco\n4\n0\n", config);
        assert!(report.contains("eco"));
    }

    #[test]
    fn test_admin_initial_role() {
        let config = PanelConfig::default().with_initial_role("Admin");
        let (_, _, report) = run("6\n  eco  \n0\n", config);
        assert_eq!(report, "Energy mode: eco | Consumption: 312 kWh/h");
    }

    #[test]
    fn test_street_and_devices() {
        let (output, _, _) = run("5\n7\n0\n", PanelConfig::default());
        assert!(output.contains("Lamps: 35 | Cameras: 12 | Solar panels: 20"));
        assert!(output.contains("lighting: Smart Lamp: On - 90% brightness"));
        assert!(output.contains("transport: Smart Traffic Light: GREEN - traffic allowed"));
    }

    #[test]
    fn test_mode_prompt_at_end_of_input_exits() {
        let (output, notices, _) = run("6\n", PanelConfig::default());
        assert!(output.contains(MODE_PROMPT));
        assert!(output.contains(GOODBYE));
        assert!(notices.is_empty());
    }
}
