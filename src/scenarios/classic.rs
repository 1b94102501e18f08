//! The three-body orbit and the bouncing-ball box

use super::Spawner;
use crate::physics::{Body, BodyError, Boundary, Scalar, Vector};
use bevy::color::palettes::css;

/// Constant downward pull, in world units per second squared
pub(super) const EARTH_LIKE_FIELD: Vector = Vector::new(0.0, -500.0);

const SCREEN_WIDTH: Scalar = 1280.0;
const SCREEN_HEIGHT: Scalar = 720.0;

pub(super) fn screen_boundary() -> Boundary {
    Boundary::centered(SCREEN_WIDTH, SCREEN_HEIGHT)
}

pub(super) fn three_body(spawner: &mut Spawner) -> Result<(), BodyError> {
    spawner.spawn(
        "Alpha",
        css::WHITE,
        Body::builder(Vector::new(-340.0, 60.0), 30.0)
            .mass(5000.0)
            .velocity(Vector::new(0.0, 50.0)),
    )?;
    spawner.spawn(
        "Beta",
        css::WHITE,
        Body::builder(Vector::new(260.0, 60.0), 40.0)
            .mass(8000.0)
            .velocity(Vector::new(0.0, -50.0)),
    )?;
    spawner.spawn(
        "Gamma",
        css::WHITE,
        Body::builder(Vector::new(-40.0, 210.0), 20.0)
            .mass(2000.0)
            .velocity(Vector::new(30.0, 0.0)),
    )?;

    Ok(())
}

/// Four balls with mass equal to radius; the last one is thrown sideways
pub(super) fn bouncing_balls(spawner: &mut Spawner) -> Result<(), BodyError> {
    let balls = [
        (Vector::new(-340.0, 260.0), 40.0, Vector::ZERO),
        (Vector::new(-40.0, 310.0), 40.0, Vector::ZERO),
        (Vector::new(260.0, 210.0), 30.0, Vector::ZERO),
        (Vector::new(-40.0, 280.0), 40.0, Vector::new(400.0, 0.0)),
    ];

    for (i, (position, radius, velocity)) in balls.into_iter().enumerate() {
        spawner.spawn(
            format!("Ball{}", i + 1),
            css::WHITE,
            Body::builder(position, radius).velocity(velocity),
        )?;
    }

    Ok(())
}
