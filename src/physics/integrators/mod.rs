//! Numerical integration methods for the per-body motion update

use crate::physics::body::Body;
use crate::physics::boundary::Boundary;
use crate::physics::math::{Scalar, Vector};
use bevy::log::trace;

pub mod explicit_euler;
pub mod registry;
pub mod symplectic_euler;

pub use explicit_euler::ExplicitEuler;
pub use registry::{IntegratorRegistry, UnknownIntegrator};
pub use symplectic_euler::SymplecticEuler;

/// Base trait for all integrators
///
/// Integrators are stateless: the acceleration for the tick has already been
/// accumulated by the force and collision passes and is handed in as a value.
pub trait Integrator: Send + Sync {
    /// Create a boxed clone of this integrator
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Advance a single body's state by one time step
    ///
    /// # Arguments
    /// * `position` - Mutable reference to position
    /// * `velocity` - Mutable reference to velocity vector
    /// * `acceleration` - Acceleration accumulated for this tick
    /// * `dt` - Time step
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Get the name of this integrator
    fn name(&self) -> &'static str;

    /// Get alternative names for this integrator
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Get the order of this integrator
    fn convergence_order(&self) -> usize;
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Integrator").field(&self.name()).finish()
    }
}

/// Move one body through a tick: integrate, reflect off walls, record the trail
///
/// A zero `dt` is the identity and records nothing.
pub fn advance_body(
    integrator: &dyn Integrator,
    body: &mut Body,
    dt: Scalar,
    boundary: Option<&Boundary>,
) {
    if dt == 0.0 {
        return;
    }

    let acceleration = body.acceleration;
    integrator.step(&mut body.position, &mut body.velocity, acceleration, dt);

    if let Some(boundary) = boundary {
        let reflection = boundary.reflect(body);
        if reflection.any() {
            trace!("Body bounced off the boundary: {:?}", reflection);
        }
    }

    body.record_trail();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::moving_body;

    #[test]
    fn test_advance_body_records_trail() {
        let mut body = moving_body(Vector::ZERO, Vector::new(10.0, 0.0), 1.0, 1.0);

        advance_body(&SymplecticEuler, &mut body, 0.5, None);

        assert_eq!(body.position, Vector::new(5.0, 0.0));
        assert_eq!(body.trail().newest(), Some(Vector::new(5.0, 0.0)));
    }

    #[test]
    fn test_advance_body_zero_dt_is_identity() {
        let mut body = moving_body(Vector::ONE, Vector::new(10.0, 0.0), 1.0, 1.0);
        body.accelerate(Vector::new(0.0, -9.81));
        let before = body.clone();

        advance_body(&SymplecticEuler, &mut body, 0.0, None);

        assert_eq!(body, before);
    }

    #[test]
    fn test_advance_body_applies_boundary() {
        let boundary = Boundary::centered(100.0, 100.0);
        let mut body = moving_body(Vector::new(0.0, -38.0), Vector::new(0.0, -100.0), 10.0, 1.0);

        advance_body(&SymplecticEuler, &mut body, 0.1, Some(&boundary));

        assert_eq!(body.position.y, -40.0);
        assert!(body.velocity.y > 0.0);
        assert_eq!(body.trail().newest(), Some(body.position));
    }

    #[test]
    fn test_boxed_integrator_clone_and_debug() {
        let boxed: Box<dyn Integrator> = Box::new(SymplecticEuler);
        let cloned = boxed.clone();

        assert_eq!(cloned.name(), "symplectic_euler");
        assert_eq!(format!("{:?}", &*cloned), "Integrator(\"symplectic_euler\")");
    }
}
