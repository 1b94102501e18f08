//! Gravitas prelude module
//!
//! Re-exports the types most plugins need to reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;
pub use rand::Rng;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - Events and states
pub use crate::events::{ScenarioLoaded, SimulationCommand};
pub use crate::states::AppState;

// Internal re-exports - Resources
pub use crate::resources::{ActiveScenario, BodyAppearances, SharedRng, SimulationWorld};

// Internal re-exports - Physics and scenarios
pub use crate::physics::{Body, Scalar, Simulation, SimulationParams, Vector};
pub use crate::scenarios::{BodyAppearance, ScenarioKind, ScenarioSetup};
