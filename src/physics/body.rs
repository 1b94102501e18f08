//! Circular bodies taking part in the simulation

use crate::physics::math::{Scalar, Vector};
use crate::physics::trail::Trail;
use thiserror::Error;

/// Trail capacity used when a builder does not set one
pub const DEFAULT_MAX_TRAIL: usize = 80;

/// Bounce damping used when a builder does not set one
pub const DEFAULT_RESTITUTION: Scalar = 0.8;

/// Reasons a body cannot be constructed
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(Scalar),
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(Scalar),
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(Scalar),
    #[error("body {0} must be finite")]
    NonFiniteState(&'static str),
}

/// A mutable physical entity: a disc with mass, motion and a trail
///
/// Mass and radius are fixed at construction and always positive. The
/// acceleration is transient: the simulation clears it at the start of every
/// tick and it carries no meaning between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    pub(crate) acceleration: Vector,
    mass: Scalar,
    radius: Scalar,
    restitution: Scalar,
    trail: Trail,
}

impl Body {
    /// Start building a body at `position` with the given `radius`
    pub fn builder(position: Vector, radius: Scalar) -> BodyBuilder {
        BodyBuilder::new(position, radius)
    }

    /// Body at rest with mass equal to its radius
    pub fn new(position: Vector, radius: Scalar) -> Result<Self, BodyError> {
        Self::builder(position, radius).build()
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> Scalar {
        self.radius
    }

    #[inline]
    pub fn restitution(&self) -> Scalar {
        self.restitution
    }

    /// Acceleration accumulated so far in the current tick
    #[inline]
    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub(crate) fn reset_acceleration(&mut self) {
        self.acceleration = Vector::ZERO;
    }

    pub(crate) fn accelerate(&mut self, acceleration: Vector) {
        self.acceleration += acceleration;
    }

    pub(crate) fn record_trail(&mut self) {
        self.trail.push(self.position);
    }
}

/// Validating builder for [`Body`]
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    position: Vector,
    radius: Scalar,
    velocity: Vector,
    mass: Option<Scalar>,
    restitution: Scalar,
    max_trail: usize,
}

impl BodyBuilder {
    fn new(position: Vector, radius: Scalar) -> Self {
        Self {
            position,
            radius,
            velocity: Vector::ZERO,
            mass: None,
            restitution: DEFAULT_RESTITUTION,
            max_trail: DEFAULT_MAX_TRAIL,
        }
    }

    pub fn velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(mut self, mass: Scalar) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn restitution(mut self, restitution: Scalar) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn max_trail(mut self, max_trail: usize) -> Self {
        self.max_trail = max_trail;
        self
    }

    pub fn build(self) -> Result<Body, BodyError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BodyError::InvalidRadius(self.radius));
        }

        let mass = self.mass.unwrap_or(self.radius);
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BodyError::InvalidMass(mass));
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(BodyError::InvalidRestitution(self.restitution));
        }

        if !self.position.is_finite() {
            return Err(BodyError::NonFiniteState("position"));
        }
        if !self.velocity.is_finite() {
            return Err(BodyError::NonFiniteState("velocity"));
        }

        Ok(Body {
            position: self.position,
            velocity: self.velocity,
            acceleration: Vector::ZERO,
            mass,
            radius: self.radius,
            restitution: self.restitution,
            trail: Trail::with_capacity(self.max_trail),
        })
    }
}
