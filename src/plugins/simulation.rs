//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the [`SimulationWorld`] resource, loads scenarios into it, advances it
//! on the fixed-step schedule and reacts to [`SimulationCommand`]s.

use crate::physics::integrators::{IntegratorRegistry, SymplecticEuler};
use crate::physics::BodyError;
use crate::prelude::*;
use bevy::ecs::system::SystemParam;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Sync,
    UI,
}

pub struct SimulationPlugin {
    config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(SharedRng::from_optional_seed(config.scenario.seed));
        app.insert_resource(ActiveScenario(config.scenario.initial));
        app.insert_resource(Time::<Fixed>::from_seconds(config.physics.timestep));
        app.init_resource::<IntegratorRegistry>();
        app.init_resource::<SimulationWorld>();
        app.init_resource::<BodyAppearances>();

        app.add_event::<SimulationCommand>();
        app.add_event::<ScenarioLoaded>();

        app.insert_state(if config.scenario.start_paused {
            AppState::Paused
        } else {
            AppState::Running
        });

        app.insert_resource(config);

        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Sync, SimulationSet::UI).chain(),
        );

        app.add_systems(Startup, load_initial_scenario);
        app.add_systems(
            FixedUpdate,
            tick_simulation.run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            (
                handle_scenario_commands,
                handle_toggle_pause_simulation_event,
                handle_quit_event,
            )
                .in_set(SimulationSet::Input),
        );
        app.add_systems(OnEnter(AppState::Paused), pause_simulation);
        app.add_systems(OnEnter(AppState::Running), resume_simulation);
    }
}

/// Build a ready-to-run simulation for `kind` with the configuration applied
///
/// With a configured seed the RNG is reseeded first, so every load of the
/// same preset is identical.
pub fn build_simulation(
    kind: ScenarioKind,
    config: &SimulationConfig,
    rng: &mut SharedRng,
    registry: &IntegratorRegistry,
) -> Result<(Simulation, Vec<BodyAppearance>), BodyError> {
    if let Some(seed) = config.scenario.seed {
        *rng = SharedRng::from_seed(seed);
    }

    let setup = kind.build(&mut rng.0, &config.scenario_options())?;

    let mut params = setup.params;
    params.min_force_distance = config.physics.min_force_distance;
    params.collision_epsilon = config.physics.collision_epsilon;
    params.collisions_enabled &= config.physics.collisions;

    let integrator = registry
        .create(&config.physics.integrator)
        .unwrap_or_else(|e| {
            warn!("{}. Falling back to symplectic_euler.", e);
            Box::new(SymplecticEuler)
        });

    let simulation = Simulation::new(params, setup.bodies).with_integrator(integrator);
    Ok((simulation, setup.appearances))
}

/// Everything needed to swap the loaded scenario
#[derive(SystemParam)]
pub struct ScenarioLoader<'w> {
    config: Res<'w, SimulationConfig>,
    registry: Res<'w, IntegratorRegistry>,
    rng: ResMut<'w, SharedRng>,
    active: ResMut<'w, ActiveScenario>,
    world: ResMut<'w, SimulationWorld>,
    appearances: ResMut<'w, BodyAppearances>,
    state: Res<'w, State<AppState>>,
    loaded: EventWriter<'w, ScenarioLoaded>,
}

impl ScenarioLoader<'_> {
    /// Replace the current simulation; on failure the old one keeps running
    pub fn load(&mut self, kind: ScenarioKind) {
        match build_simulation(kind, &self.config, &mut self.rng, &self.registry) {
            Ok((mut simulation, appearances)) => {
                simulation.set_paused(*self.state.get() == AppState::Paused);
                let body_count = simulation.bodies().len();

                info!(
                    "Loaded scenario {} with {} bodies (G = {})",
                    kind,
                    body_count,
                    simulation.gravity().gravitational_constant
                );

                **self.world = simulation;
                **self.appearances = appearances;
                **self.active = kind;
                self.loaded.write(ScenarioLoaded { body_count });
            }
            Err(e) => {
                error!("Failed to build scenario {}: {}", kind, e);
            }
        }
    }

    pub fn active(&self) -> ScenarioKind {
        **self.active
    }
}

fn load_initial_scenario(mut loader: ScenarioLoader) {
    let kind = loader.active();
    loader.load(kind);
}

fn tick_simulation(time: Res<Time<Fixed>>, mut world: ResMut<SimulationWorld>) {
    world.tick(time.timestep().as_secs_f64());
}

pub fn handle_scenario_commands(
    mut commands_reader: EventReader<SimulationCommand>,
    mut loader: ScenarioLoader,
) {
    for command in commands_reader.read() {
        let kind = match command {
            SimulationCommand::Restart => loader.active(),
            SimulationCommand::NextScenario => loader.active().next(),
            SimulationCommand::PreviousScenario => loader.active().previous(),
            _ => continue,
        };

        loader.load(kind);
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::TogglePause) {
            continue;
        }
        match current_state.get() {
            AppState::Running => next_state.set(AppState::Paused),
            AppState::Paused => next_state.set(AppState::Running),
        }
    }
}

fn handle_quit_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    if commands_reader
        .read()
        .any(|command| matches!(command, SimulationCommand::Quit))
    {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

fn pause_simulation(mut world: ResMut<SimulationWorld>) {
    debug!("Simulation paused at tick {}", world.tick_count());
    world.set_paused(true);
}

fn resume_simulation(mut world: ResMut<SimulationWorld>) {
    world.set_paused(false);
}
