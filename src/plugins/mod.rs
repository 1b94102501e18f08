//! Bevy plugins that wrap the physics core in an interactive application

pub mod controls;
pub mod hud;
pub mod simulation;
pub mod visualization;

pub use controls::ControlsPlugin;
pub use hud::HudPlugin;
pub use simulation::{SimulationPlugin, SimulationSet};
pub use visualization::VisualizationPlugin;
