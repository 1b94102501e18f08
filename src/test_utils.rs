//! Fixtures shared by unit tests, integration tests and benches

use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use crate::events::SimulationCommand;
use crate::physics::{Body, Scalar, Vector};
use crate::states::AppState;

/// A body at rest with an explicit mass and default restitution and trail
pub fn body_at(position: Vector, radius: Scalar, mass: Scalar) -> Body {
    moving_body(position, Vector::ZERO, radius, mass)
}

/// A moving body with an explicit mass and default restitution and trail
pub fn moving_body(position: Vector, velocity: Vector, radius: Scalar, mass: Scalar) -> Body {
    Body::builder(position, radius)
        .velocity(velocity)
        .mass(mass)
        .build()
        .expect("fixture bodies are valid")
}

/// Minimal headless app with input, states and frozen time
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        bevy::input::InputPlugin,
        bevy::state::app::StatesPlugin,
    ));

    // Virtual time stays frozen; tests run `FixedUpdate` by hand
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

    app.add_event::<SimulationCommand>();
    app.init_state::<AppState>();

    app
}

/// Queue a keyboard event as the window backend would deliver it
pub fn send_key(app: &mut App, logical_key: Key, key_code: KeyCode, state: ButtonState) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key,
        state,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}
