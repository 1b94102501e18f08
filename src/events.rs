//! Centralized event definitions
//!
//! Keyboard input is translated into [`SimulationCommand`]s by the controls
//! plugin and handled by the simulation plugin, so the two never share state.

use bevy::prelude::*;

/// Unified simulation command pattern
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    /// Rebuild the current scenario
    Restart,
    TogglePause,
    NextScenario,
    PreviousScenario,
    Quit,
}

/// Sent after the body set was replaced so views can respawn
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioLoaded {
    pub body_count: usize,
}
