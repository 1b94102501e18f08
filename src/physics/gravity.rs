//! Pairwise Newtonian gravity for the all-pairs force pass

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector, direction};

/// Floor applied to the separation used in the force law
pub const DEFAULT_MIN_FORCE_DISTANCE: Scalar = 5.0;

/// Newtonian gravity with a contact-distance singularity guard
///
/// The separation fed into `G·m₁·m₂/d²` is clamped to at least
/// `max(r₁ + r₂, min_distance)`, so the force never exceeds its value at
/// contact. Exactly coincident centers contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub gravitational_constant: Scalar,
    pub min_distance: Scalar,
}

impl Gravity {
    pub fn new(gravitational_constant: Scalar) -> Self {
        Self {
            gravitational_constant,
            min_distance: DEFAULT_MIN_FORCE_DISTANCE,
        }
    }

    pub fn with_min_distance(mut self, min_distance: Scalar) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Magnitude of the attractive force between two bodies
    pub fn force_magnitude(&self, receiver: &Body, source: &Body) -> Scalar {
        let distance = (source.position - receiver.position).length();
        let clamped = distance
            .max(receiver.radius() + source.radius())
            .max(self.min_distance);

        self.gravitational_constant * receiver.mass() * source.mass() / (clamped * clamped)
    }

    /// Acceleration `source` imparts on `receiver`, directed toward `source`
    ///
    /// The force is divided by the receiver's own mass, so the two directions
    /// of a pair yield different magnitudes when masses differ.
    pub fn acceleration_on(&self, receiver: &Body, source: &Body) -> Vector {
        let Some(toward_source) = direction(source.position - receiver.position) else {
            return Vector::ZERO;
        };

        toward_source * (self.force_magnitude(receiver, source) / receiver.mass())
    }

    /// Add every pair's contribution into each body's acceleration
    ///
    /// Both directions of a pair are computed from the pre-pass state before
    /// either is applied, so iteration order has no effect on the result.
    pub fn accumulate(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let on_i = self.acceleration_on(&bodies[i], &bodies[j]);
                let on_j = self.acceleration_on(&bodies[j], &bodies[i]);

                bodies[i].accelerate(on_i);
                bodies[j].accelerate(on_j);
            }
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(1e3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::body_at;

    #[test]
    fn test_acceleration_points_toward_source() {
        let gravity = Gravity::new(1000.0);
        let a = body_at(Vector::new(0.0, 0.0), 10.0, 1000.0);
        let b = body_at(Vector::new(100.0, 0.0), 10.0, 1000.0);

        let on_a = gravity.acceleration_on(&a, &b);
        let on_b = gravity.acceleration_on(&b, &a);

        assert!(on_a.x > 0.0 && on_a.y == 0.0);
        assert!(on_b.x < 0.0 && on_b.y == 0.0);
        // G·m/d² = 1000·1000/100²
        assert!((on_a.length() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_newton_third_law() {
        let gravity = Gravity::new(5000.0);
        let a = body_at(Vector::new(-3.0, 40.0), 4.0, 250.0);
        let b = body_at(Vector::new(60.0, -12.0), 9.0, 7000.0);

        let on_a = gravity.acceleration_on(&a, &b);
        let on_b = gravity.acceleration_on(&b, &a);
        let net_force = on_a * a.mass() + on_b * b.mass();

        assert!(
            net_force.length() < 1e-9 * on_a.length() * a.mass(),
            "Net force not zero: {net_force:?}"
        );
    }

    #[test]
    fn test_clamps_to_contact_distance() {
        let gravity = Gravity::new(1000.0);
        let a = body_at(Vector::ZERO, 10.0, 100.0);
        let at_contact = body_at(Vector::new(20.0, 0.0), 10.0, 100.0);
        let overlapping = body_at(Vector::new(0.5, 0.0), 10.0, 100.0);

        let contact = gravity.force_magnitude(&a, &at_contact);
        let close = gravity.force_magnitude(&a, &overlapping);

        assert!(close <= contact);
        assert!((close - contact).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_to_floor_distance_for_small_bodies() {
        let gravity = Gravity::new(1.0).with_min_distance(5.0);
        let a = body_at(Vector::ZERO, 0.5, 1.0);
        let b = body_at(Vector::new(1.0, 0.0), 0.5, 1.0);

        // 1·1·1 / 5²
        assert!((gravity.force_magnitude(&a, &b) - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_centers_contribute_nothing() {
        let gravity = Gravity::new(1000.0);
        let a = body_at(Vector::new(7.0, 7.0), 1.0, 1.0);
        let b = body_at(Vector::new(7.0, 7.0), 1.0, 1.0);

        assert_eq!(gravity.acceleration_on(&a, &b), Vector::ZERO);
    }

    #[test]
    fn test_accumulate_sums_all_pairs() {
        let gravity = Gravity::new(1.0).with_min_distance(0.0);
        let mut bodies = vec![
            body_at(Vector::new(-10.0, 0.0), 1.0, 1.0),
            body_at(Vector::ZERO, 1.0, 1.0),
            body_at(Vector::new(10.0, 0.0), 1.0, 1.0),
        ];

        gravity.accumulate(&mut bodies);

        // Middle body is pulled equally both ways
        assert!(bodies[1].acceleration().length() < 1e-12);
        // Outer bodies: 1/10² + 1/20² toward the middle
        let expected = 1.0 / 100.0 + 1.0 / 400.0;
        assert!((bodies[0].acceleration().x - expected).abs() < 1e-12);
        assert!((bodies[2].acceleration().x + expected).abs() < 1e-12);
    }

    #[test]
    fn test_accumulate_is_order_independent() {
        let gravity = Gravity::new(300.0);
        let forward = vec![
            body_at(Vector::new(0.0, 0.0), 3.0, 10.0),
            body_at(Vector::new(50.0, 5.0), 2.0, 20.0),
            body_at(Vector::new(-20.0, 30.0), 1.0, 5.0),
        ];
        let mut reversed: Vec<Body> = forward.iter().rev().cloned().collect();
        let mut forward = forward;

        gravity.accumulate(&mut forward);
        gravity.accumulate(&mut reversed);

        for (a, b) in forward.iter().zip(reversed.iter().rev()) {
            assert!((a.acceleration() - b.acceleration()).length() < 1e-12);
        }
    }
}
