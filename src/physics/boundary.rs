//! Rectangular walls that bodies bounce off

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Axis-aligned box; bodies are kept inside by reflection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub min: Vector,
    pub max: Vector,
}

/// Which axes were reflected during a boundary check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl Boundary {
    pub fn new(min: Vector, max: Vector) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box of the given size centered on the origin
    pub fn centered(width: Scalar, height: Scalar) -> Self {
        let half = Vector::new(width, height).abs() * 0.5;
        Self::new(-half, half)
    }

    /// Clamp `body` inside the box and damp the reflected velocity components
    ///
    /// Each edge is checked independently, so a corner contact reflects both
    /// axes in the same call.
    pub fn reflect(&self, body: &mut Body) -> Reflection {
        let radius = body.radius();
        let damping = body.restitution();
        let mut reflection = Reflection::default();

        if body.position.y + radius >= self.max.y {
            body.position.y = self.max.y - radius;
            body.velocity.y = -body.velocity.y * damping;
            reflection.y = true;
        }

        if body.position.y - radius <= self.min.y {
            body.position.y = self.min.y + radius;
            body.velocity.y = -body.velocity.y * damping;
            reflection.y = true;
        }

        if body.position.x + radius >= self.max.x {
            body.position.x = self.max.x - radius;
            body.velocity.x = -body.velocity.x * damping;
            reflection.x = true;
        }

        if body.position.x - radius <= self.min.x {
            body.position.x = self.min.x + radius;
            body.velocity.x = -body.velocity.x * damping;
            reflection.x = true;
        }

        reflection
    }
}
