//! Explicit Euler integration method (forward Euler)
//!
//! Provided for comparison. Orbits integrated with it spiral outward because
//! energy drifts every step.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// Explicit Euler integrator (forward Euler method)
///
/// ```text
/// x(t+dt) = x(t) + v(t) * dt
/// v(t+dt) = v(t) + a(t) * dt
/// ```
///
/// Position is advanced with the old velocity, before the velocity update.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        // Update position first using CURRENT velocity: x(t+dt) = x(t) + v(t) * dt
        *position += *velocity * dt;

        // Then update velocity: v(t+dt) = v(t) + a(t) * dt
        *velocity += acceleration * dt;
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["forward_euler"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_euler_uses_old_velocity() {
        let integrator = ExplicitEuler;

        let mut position = Vector::new(0.0, 10.0);
        let mut velocity = Vector::new(2.0, 0.0);
        let acceleration = Vector::new(0.0, -10.0);

        integrator.step(&mut position, &mut velocity, acceleration, 0.5);

        assert_eq!(position, Vector::new(1.0, 10.0));
        assert_eq!(velocity, Vector::new(2.0, -5.0));
    }

    #[test]
    fn test_properties() {
        let integrator = ExplicitEuler;
        assert_eq!(integrator.name(), "explicit_euler");
        assert_eq!(integrator.convergence_order(), 1);
        assert_eq!(integrator.aliases(), vec!["forward_euler"]);
    }
}
