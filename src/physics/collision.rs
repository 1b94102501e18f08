//! Impulse-based elastic collisions between circular bodies

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};
use bevy::log::trace;

/// Separation substituted for exactly coincident centers
pub const DEFAULT_COLLISION_EPSILON: Scalar = 0.01;

/// What happened when a pair was checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    /// Centers at least `r₁ + r₂` apart
    Apart,
    /// Overlapping but already moving apart along the normal; left untouched
    Separating,
    /// Impulse exchanged and overlap corrected
    Resolved { impulse: Scalar, overlap: Scalar },
}

/// Perfectly elastic circle-circle collision response with positional correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticCollisions {
    pub epsilon: Scalar,
}

impl ElasticCollisions {
    pub fn new(epsilon: Scalar) -> Self {
        Self { epsilon }
    }

    /// Check one pair and, if it is overlapping and approaching, resolve it
    ///
    /// Bodies that overlap while separating keep their overlap for this tick:
    /// neither the impulse nor the positional correction is applied.
    pub fn resolve(&self, first: &mut Body, second: &mut Body) -> Contact {
        let offset = first.position - second.position;
        let mut distance = offset.length();
        let min_distance = first.radius() + second.radius();

        if distance >= min_distance {
            return Contact::Apart;
        }

        let normal = if distance == 0.0 {
            trace!("Coincident bodies; substituting separation {}", self.epsilon);
            distance = self.epsilon;
            Vector::X
        } else {
            offset / distance
        };

        let relative_velocity = first.velocity - second.velocity;
        let velocity_along_normal = relative_velocity.dot(normal);

        if velocity_along_normal > 0.0 {
            return Contact::Separating;
        }

        let (m1, m2) = (first.mass(), second.mass());
        let total_mass = m1 + m2;

        let impulse = 2.0 * velocity_along_normal / total_mass;
        first.velocity -= normal * (impulse * m2);
        second.velocity += normal * (impulse * m1);

        // Heavier bodies are displaced proportionally less
        let overlap = (min_distance - distance).max(0.0);
        let correction = normal * (overlap / total_mass);
        first.position += correction * m2;
        second.position -= correction * m1;

        Contact::Resolved { impulse, overlap }
    }

    /// Check every pair `(i, j)` with `i < j` exactly once
    ///
    /// Returns the number of pairs that were resolved. Overlaps created by a
    /// correction are not revisited until the next tick.
    pub fn resolve_all(&self, bodies: &mut [Body]) -> usize {
        let n = bodies.len();
        let mut resolved = 0;

        for i in 0..n {
            for j in (i + 1)..n {
                let (first, second) = pair_mut(bodies, i, j);
                if matches!(self.resolve(first, second), Contact::Resolved { .. }) {
                    resolved += 1;
                }
            }
        }

        resolved
    }
}

impl Default for ElasticCollisions {
    fn default() -> Self {
        Self::new(DEFAULT_COLLISION_EPSILON)
    }
}

/// Two distinct mutable borrows out of one slice, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
