//! Command line interface for Gravitas

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, SimulationConfig};
use crate::physics::integrators::{IntegratorRegistry, UnknownIntegrator};
use crate::scenarios::ScenarioKind;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid integrator: {0}")]
    InvalidIntegrator(#[from] UnknownIntegrator),
    #[error("Invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),
    #[error("Invalid gravitational constant {0}: must be finite and non-negative")]
    InvalidGravity(f64),
}

/// Gravitas - 2D gravity and collision sandbox
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scenario to load first (overrides config file)
    #[arg(short = 'S', long, value_enum, value_name = "NAME")]
    pub scenario: Option<ScenarioKind>,

    /// Gravitational constant (overrides every scenario's own)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Fixed tick length in seconds
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub timestep: Option<f64>,

    /// Integrator type (e.g., symplectic_euler, explicit_euler)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Random seed for scenario generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,

    /// Disable body-body collisions
    #[arg(long)]
    pub no_collisions: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,

    /// List available scenarios and exit
    #[arg(long)]
    pub list_scenarios: bool,
}

/// Handles the --list-integrators flag by printing available integrators
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::default();
    println!("Available integrators:");
    for (name, order) in registry.list_orders() {
        println!("  - {name} (order {order})");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Handles the --list-scenarios flag by printing every preset
pub fn handle_list_scenarios() {
    println!("Available scenarios:");
    for kind in ScenarioKind::ALL {
        println!("  - {:<20} {}", kind.name(), kind.title());
    }
}

/// Loads configuration from every source, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let config = match &args.config {
        Some(path) => {
            println!("Loading configuration from: {}", path.display());
            SimulationConfig::load(Some(path))?
        }
        None => SimulationConfig::load_or_default(None),
    };

    apply_overrides(config, args)
}

/// Apply command-line flags on top of an already loaded configuration
pub fn apply_overrides(
    mut config: SimulationConfig,
    args: &Args,
) -> Result<SimulationConfig, CliError> {
    if let Some(scenario) = args.scenario {
        println!("Starting with scenario: {scenario}");
        config.scenario.initial = scenario;
    }

    if let Some(gravity) = args.gravity {
        if !(gravity.is_finite() && gravity >= 0.0) {
            return Err(CliError::InvalidGravity(gravity));
        }
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = Some(gravity);
    }

    if let Some(timestep) = args.timestep {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(CliError::InvalidTimestep(timestep));
        }
        config.physics.timestep = timestep;
    }

    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        IntegratorRegistry::default().create(integrator_type)?;

        println!("Using integrator: {integrator_type}");
        config.physics.integrator = integrator_type.clone();
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.scenario.seed = Some(seed);
    }

    if args.paused {
        config.scenario.start_paused = true;
    }

    if args.no_collisions {
        config.physics.collisions = false;
    }

    Ok(config)
}
