use bevy::prelude::*;

/// Whether the fixed-step tick is being driven
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Running,
    Paused,
}
