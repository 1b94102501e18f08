//! Core 2D physics: bodies, pairwise gravity, elastic collisions and integration
//!
//! Nothing in here touches ECS state. The simulation plugin owns a
//! [`Simulation`] as a resource and drives it from the fixed-step schedule.

pub mod body;
pub mod boundary;
pub mod collision;
pub mod gravity;
pub mod integrators;
pub mod math;
pub mod simulation;
pub mod trail;

pub use body::{Body, BodyBuilder, BodyError};
pub use boundary::{Boundary, Reflection};
pub use collision::{Contact, ElasticCollisions};
pub use gravity::Gravity;
pub use integrators::{Integrator, IntegratorRegistry, UnknownIntegrator};
pub use math::{Scalar, Vector};
pub use simulation::{Simulation, SimulationParams};
pub use trail::Trail;
