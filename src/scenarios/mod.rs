//! Preset body sets the application can load and cycle through
//!
//! Every preset is built from a caller-supplied RNG so that a fixed seed
//! reproduces the same initial state exactly.

mod classic;
mod clusters;

use crate::physics::{Body, BodyBuilder, BodyError, Scalar, SimulationParams};
use bevy::color::Color;
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gravitational constant the cluster presets are tuned for
pub const CLUSTER_GRAVITATIONAL_CONSTANT: Scalar = 5000.0;

/// Gravitational constant the three-body preset is tuned for
pub const THREE_BODY_GRAVITATIONAL_CONSTANT: Scalar = 1000.0;

/// Available presets, in cycling order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ScenarioKind {
    #[default]
    AsteroidBelt,
    KuiperBelt,
    JovianMoons,
    RandomSmallBodies,
    ThreeBody,
    BouncingBalls,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::AsteroidBelt,
        ScenarioKind::KuiperBelt,
        ScenarioKind::JovianMoons,
        ScenarioKind::RandomSmallBodies,
        ScenarioKind::ThreeBody,
        ScenarioKind::BouncingBalls,
    ];

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or_default()
    }

    /// The following preset, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding preset, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Heading shown in the HUD
    pub fn title(self) -> &'static str {
        match self {
            ScenarioKind::AsteroidBelt => "Asteroid Belt Cluster",
            ScenarioKind::KuiperBelt => "Kuiper Belt Objects",
            ScenarioKind::JovianMoons => "Jovian Moon System",
            ScenarioKind::RandomSmallBodies => "Random Small Bodies",
            ScenarioKind::ThreeBody => "Three Body Problem",
            ScenarioKind::BouncingBalls => "Bouncing Balls",
        }
    }

    /// Identifier accepted on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::AsteroidBelt => "asteroid_belt",
            ScenarioKind::KuiperBelt => "kuiper_belt",
            ScenarioKind::JovianMoons => "jovian_moons",
            ScenarioKind::RandomSmallBodies => "random_small_bodies",
            ScenarioKind::ThreeBody => "three_body",
            ScenarioKind::BouncingBalls => "bouncing_balls",
        }
    }

    pub fn default_gravitational_constant(self) -> Scalar {
        match self {
            ScenarioKind::AsteroidBelt
            | ScenarioKind::KuiperBelt
            | ScenarioKind::JovianMoons
            | ScenarioKind::RandomSmallBodies => CLUSTER_GRAVITATIONAL_CONSTANT,
            ScenarioKind::ThreeBody => THREE_BODY_GRAVITATIONAL_CONSTANT,
            ScenarioKind::BouncingBalls => 0.0,
        }
    }

    pub fn default_max_trail(self) -> usize {
        match self {
            ScenarioKind::ThreeBody => 100,
            ScenarioKind::BouncingBalls => 0,
            _ => 80,
        }
    }

    /// Build the preset's bodies and simulation parameters
    pub fn build<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        options: &ScenarioOptions,
    ) -> Result<ScenarioSetup, BodyError> {
        // The ball box has no mutual gravity to override
        let gravitational_constant = match self {
            ScenarioKind::BouncingBalls => self.default_gravitational_constant(),
            _ => options
                .gravitational_constant
                .unwrap_or_else(|| self.default_gravitational_constant()),
        };
        let max_trail = options
            .max_trail
            .unwrap_or_else(|| self.default_max_trail());

        let mut spawner = Spawner::new(max_trail);
        let mut params = SimulationParams {
            gravitational_constant,
            ..SimulationParams::default()
        };

        match self {
            ScenarioKind::AsteroidBelt => {
                params.collisions_enabled = false;
                clusters::asteroid_belt(&mut spawner, rng, gravitational_constant)?;
            }
            ScenarioKind::KuiperBelt => {
                params.collisions_enabled = false;
                clusters::kuiper_belt(&mut spawner, rng)?;
            }
            ScenarioKind::JovianMoons => {
                params.collisions_enabled = false;
                clusters::jovian_moons(&mut spawner, rng, gravitational_constant)?;
            }
            ScenarioKind::RandomSmallBodies => {
                params.collisions_enabled = false;
                clusters::random_small_bodies(&mut spawner, rng)?;
            }
            ScenarioKind::ThreeBody => {
                params.collisions_enabled = false;
                classic::three_body(&mut spawner)?;
            }
            ScenarioKind::BouncingBalls => {
                params.uniform_field = classic::EARTH_LIKE_FIELD;
                params.boundary = Some(classic::screen_boundary());
                classic::bouncing_balls(&mut spawner)?;
            }
        }

        let (bodies, appearances) = spawner.finish();
        Ok(ScenarioSetup {
            kind: self,
            bodies,
            appearances,
            params,
        })
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Overrides applied while building a preset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioOptions {
    /// Replaces the preset's gravitational constant, including for the
    /// orbital speeds derived from it. Must be finite and non-negative.
    /// Ignored by [`ScenarioKind::BouncingBalls`], which has no mutual gravity.
    pub gravitational_constant: Option<Scalar>,
    pub max_trail: Option<usize>,
}

/// How a body is drawn; parallel to the body list
#[derive(Debug, Clone, PartialEq)]
pub struct BodyAppearance {
    pub name: String,
    pub color: Color,
}

/// A fully built preset, ready to hand to a simulation
#[derive(Debug, Clone)]
pub struct ScenarioSetup {
    pub kind: ScenarioKind,
    pub bodies: Vec<Body>,
    pub appearances: Vec<BodyAppearance>,
    pub params: SimulationParams,
}

/// Collects bodies and their appearances in lockstep
struct Spawner {
    max_trail: usize,
    bodies: Vec<Body>,
    appearances: Vec<BodyAppearance>,
}

impl Spawner {
    fn new(max_trail: usize) -> Self {
        Self {
            max_trail,
            bodies: Vec::new(),
            appearances: Vec::new(),
        }
    }

    fn spawn(
        &mut self,
        name: impl Into<String>,
        color: impl Into<Color>,
        builder: BodyBuilder,
    ) -> Result<(), BodyError> {
        let body = builder.max_trail(self.max_trail).build()?;
        self.bodies.push(body);
        self.appearances.push(BodyAppearance {
            name: name.into(),
            color: color.into(),
        });
        Ok(())
    }

    fn finish(self) -> (Vec<Body>, Vec<BodyAppearance>) {
        (self.bodies, self.appearances)
    }
}
