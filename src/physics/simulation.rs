//! Fixed-step orchestration of the physics passes

use crate::physics::body::Body;
use crate::physics::boundary::Boundary;
use crate::physics::collision::{DEFAULT_COLLISION_EPSILON, ElasticCollisions};
use crate::physics::gravity::{DEFAULT_MIN_FORCE_DISTANCE, Gravity};
use crate::physics::integrators::{Integrator, SymplecticEuler, advance_body};
use crate::physics::math::{Scalar, Vector};
use bevy::log::{debug, trace, warn};

/// Constants a simulation is built with
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub gravitational_constant: Scalar,
    pub min_force_distance: Scalar,
    pub collision_epsilon: Scalar,
    pub collisions_enabled: bool,
    /// Constant acceleration applied to every body each tick
    pub uniform_field: Vector,
    pub boundary: Option<Boundary>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravitational_constant: 1e3,
            min_force_distance: DEFAULT_MIN_FORCE_DISTANCE,
            collision_epsilon: DEFAULT_COLLISION_EPSILON,
            collisions_enabled: true,
            uniform_field: Vector::ZERO,
            boundary: None,
        }
    }
}

/// Owns the body set and advances it one tick at a time
///
/// Each tick runs strictly in this order: clear accelerations, accumulate
/// gravity for every pair, resolve collisions for every pair, integrate every
/// body. Collisions therefore see pre-integration positions and velocities.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    gravity: Gravity,
    collisions: ElasticCollisions,
    collisions_enabled: bool,
    uniform_field: Vector,
    boundary: Option<Boundary>,
    integrator: Box<dyn Integrator>,
    paused: bool,
    tick_count: u64,
    elapsed: Scalar,
}

impl Simulation {
    pub fn new(params: SimulationParams, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            gravity: Gravity::new(params.gravitational_constant)
                .with_min_distance(params.min_force_distance),
            collisions: ElasticCollisions::new(params.collision_epsilon),
            collisions_enabled: params.collisions_enabled,
            uniform_field: params.uniform_field,
            boundary: params.boundary,
            integrator: Box::new(SymplecticEuler),
            paused: false,
            tick_count: 0,
            elapsed: 0.0,
        }
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Advance simulated time by `dt`
    ///
    /// Does nothing while paused or when `dt` is zero. Negative or non-finite
    /// timesteps are rejected.
    pub fn tick(&mut self, dt: Scalar) {
        if self.paused {
            return;
        }

        if !dt.is_finite() || dt < 0.0 {
            warn!("Ignoring tick with invalid timestep {}", dt);
            return;
        }

        if dt == 0.0 {
            trace!("Zero-length tick");
            return;
        }

        for body in &mut self.bodies {
            body.reset_acceleration();
            body.accelerate(self.uniform_field);
        }

        self.gravity.accumulate(&mut self.bodies);

        if self.collisions_enabled {
            let resolved = self.collisions.resolve_all(&mut self.bodies);
            if resolved > 0 {
                trace!("Resolved {} collisions", resolved);
            }
        }

        let boundary = self.boundary.as_ref();
        for body in &mut self.bodies {
            advance_body(self.integrator.as_ref(), body, dt, boundary);
        }

        self.tick_count += 1;
        self.elapsed += dt;
    }

    /// Bodies in stable insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Replace the whole body set at once
    pub fn reset(&mut self, bodies: Vec<Body>) {
        debug!(
            "Resetting simulation: {} bodies replaced by {}",
            self.bodies.len(),
            bodies.len()
        );
        self.bodies = bodies;
        self.tick_count = 0;
        self.elapsed = 0.0;
    }

    /// Append a body between ticks, returning its index
    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove a body between ticks; later bodies keep their relative order
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        (index < self.bodies.len()).then(|| self.bodies.remove(index))
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated time since construction or the last reset
    pub fn elapsed(&self) -> Scalar {
        self.elapsed
    }

    pub fn gravity(&self) -> &Gravity {
        &self.gravity
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    pub fn total_mass(&self) -> Scalar {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> Vector {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Mass-weighted mean position, `None` for an empty simulation
    pub fn center_of_mass(&self) -> Option<Vector> {
        let total_mass = self.total_mass();
        if total_mass <= 0.0 {
            return None;
        }

        let weighted: Vector = self
            .bodies
            .iter()
            .map(|body| body.position * body.mass())
            .sum();
        Some(weighted / total_mass)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationParams::default(), Vec::new())
    }
}
