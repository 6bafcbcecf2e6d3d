//! # city_panel — Control panel
//!
//! Console front end for the simulated city. It owns the single
//! [`CityController`](city_core::CityController), registers the lighting,
//! transport and role-gated energy subsystems, and drives them from a
//! numbered menu.
//!
//! ## Startup Sequence
//!
//! 1. Initialise logging (stderr, `RUST_LOG` aware).
//! 2. Load the optional JSON config and apply command-line overrides.
//! 3. Build the session and enter the menu loop on stdin/stdout.

mod config;
mod error;
mod menu;
mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use city_core::{ConsoleSink, EscalationPolicy, Notifier};
use config::PanelConfig;
use session::Session;

#[derive(Parser)]
#[command(name = "city_panel", about = "Smart city console control panel")]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pause after each command, in milliseconds
    #[arg(long)]
    pause_ms: Option<u64>,

    /// Role the energy subsystem starts with ("admin" or anything else)
    #[arg(short, long)]
    role: Option<String>,

    /// What switching to admin does to the energy mode: reset or preserve
    #[arg(short, long)]
    escalation: Option<EscalationPolicy>,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration.
    fn apply(self, mut config: PanelConfig) -> PanelConfig {
        if let Some(pause_ms) = self.pause_ms {
            config = config.with_pause_ms(pause_ms);
        }
        if let Some(role) = self.role {
            config = config.with_initial_role(role);
        }
        if let Some(escalation) = self.escalation {
            config = config.with_escalation(escalation);
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("city_panel=info".parse()?))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            PanelConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => PanelConfig::default(),
    };
    let config = args.apply(config);
    info!(
        pause_ms = config.pause_ms,
        role = config.initial_role,
        escalation = %config.escalation,
        "control panel starting"
    );

    let mut session = Session::new(
        config,
        Notifier::new(ConsoleSink),
        io::stdin().lock(),
        io::stdout(),
    );
    session.run().context("control panel session failed")?;

    info!(
        subsystems = session.controller().len(),
        "control panel shut down"
    );
    Ok(())
}
