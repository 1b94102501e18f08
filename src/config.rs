//! Layered application configuration
//!
//! Sources are merged in increasing priority: built-in defaults, the user's
//! `config.toml` in the platform config directory, an explicit file passed on
//! the command line, then `GRAVITAS__SECTION__KEY` environment variables.

use crate::physics::Scalar;
use crate::scenarios::{ScenarioKind, ScenarioOptions};
use ::config::{Config, Environment, File, FileFormat};
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const ENV_PREFIX: &str = "GRAVITAS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write configuration to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub trails: TrailConfig,
    pub scenario: ScenarioConfig,
    pub rendering: RenderingConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Overrides every preset's own constant when set
    pub gravitational_constant: Option<Scalar>,
    /// Fixed tick length in seconds
    pub timestep: Scalar,
    pub min_force_distance: Scalar,
    pub collision_epsilon: Scalar,
    /// Globally disables collisions; presets may also disable them
    pub collisions: bool,
    pub integrator: String,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: None,
            timestep: 1.0 / 60.0,
            min_force_distance: crate::physics::gravity::DEFAULT_MIN_FORCE_DISTANCE,
            collision_epsilon: crate::physics::collision::DEFAULT_COLLISION_EPSILON,
            collisions: true,
            integrator: "symplectic_euler".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    /// Overrides every preset's own trail length when set
    pub max_points: Option<usize>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_points: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub initial: ScenarioKind,
    /// Reseeds the RNG on every scenario load, making restarts reproducible
    pub seed: Option<u64>,
    pub start_paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub show_labels: bool,
    /// Bodies at or below this radius are drawn without a name label
    pub label_min_radius: Scalar,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            show_labels: true,
            label_min_radius: 8.0,
        }
    }
}

impl SimulationConfig {
    /// `config.toml` inside the platform's per-user config directory
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gravitas").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Merge every configuration source, with `explicit` taking priority over
    /// the user file
    ///
    /// A missing user file is skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(user_path) = Self::user_config_path() {
            debug!("Looking for user configuration at {}", user_path.display());
            builder = builder.add_source(File::from(user_path).required(false));
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load every source, falling back to defaults if anything fails
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        match Self::load(explicit) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Parse a TOML document layered over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let timestep = self.physics.timestep;
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.timestep",
                reason: format!("must be positive and finite, got {timestep}"),
            });
        }

        if let Some(g) = self
            .physics
            .gravitational_constant
            .filter(|g| !(g.is_finite() && *g >= 0.0))
        {
            return Err(ConfigError::Invalid {
                field: "physics.gravitational_constant",
                reason: format!("must be finite and non-negative, got {g}"),
            });
        }

        if !(self.physics.min_force_distance >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.min_force_distance",
                reason: format!("must be non-negative, got {}", self.physics.min_force_distance),
            });
        }

        if !(self.physics.collision_epsilon > 0.0) {
            return Err(ConfigError::Invalid {
                field: "physics.collision_epsilon",
                reason: format!("must be positive, got {}", self.physics.collision_epsilon),
            });
        }

        Ok(())
    }

    /// Build-time overrides derived from the trail and physics sections
    pub fn scenario_options(&self) -> ScenarioOptions {
        ScenarioOptions {
            gravitational_constant: self.physics.gravitational_constant,
            max_trail: if self.trails.enabled {
                self.trails.max_points
            } else {
                Some(0)
            },
        }
    }
}
