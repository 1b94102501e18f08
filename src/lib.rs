//! Gravitas library
//!
//! A 2D sandbox for Newtonian gravity and elastic collisions between circular
//! bodies. The physics core in [`physics`] is plain Rust; [`plugins`] wraps it
//! in a Bevy application.

pub mod cli;
pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod scenarios;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;
