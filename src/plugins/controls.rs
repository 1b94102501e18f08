//! Controls plugin - Self-contained plugin pattern
//!
//! Translates keyboard input into [`SimulationCommand`] events. Nothing here
//! touches simulation state directly.

use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};

/// Key bindings shown in the HUD, in display order
pub const KEY_BINDINGS: [(&str, &str); 5] = [
    ("SPACE", "Pause/Resume"),
    ("R", "Reset current simulation"),
    ("N", "Next simulation"),
    ("P", "Previous simulation"),
    ("ESC", "Quit"),
];

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SimulationCommand>();
        app.add_systems(
            Update,
            keyboard_input_handler.in_set(SimulationSet::Input),
        );
    }
}

/// The command bound to a logical key, if any
pub fn command_for_key(key: &Key) -> Option<SimulationCommand> {
    match key {
        Key::Character(c) => match c.to_lowercase().as_str() {
            "r" => Some(SimulationCommand::Restart),
            "n" => Some(SimulationCommand::NextScenario),
            "p" => Some(SimulationCommand::PreviousScenario),
            _ => None,
        },
        Key::Space => Some(SimulationCommand::TogglePause),
        Key::Escape => Some(SimulationCommand::Quit),
        _ => None,
    }
}

fn keyboard_input_handler(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut commands: EventWriter<SimulationCommand>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed || event.repeat {
            continue;
        }

        if let Some(command) = command_for_key(&event.logical_key) {
            trace!("Key {:?} -> {:?}", event.logical_key, command);
            commands.write(command);
        }
    }
}
