use crate::physics::Simulation;
use crate::scenarios::{BodyAppearance, ScenarioKind};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable generator every scenario build draws from
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::from_seed)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_os_rng())
    }
}

/// The physics state the fixed-step schedule advances
#[derive(Resource, Deref, DerefMut, Debug, Clone, Default)]
pub struct SimulationWorld(pub Simulation);

/// Preset currently loaded into [`SimulationWorld`]
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ActiveScenario(pub ScenarioKind);

/// Names and colours, index-aligned with the simulation's bodies
#[derive(Resource, Deref, DerefMut, Clone, Default, PartialEq, Debug)]
pub struct BodyAppearances(pub Vec<BodyAppearance>);
