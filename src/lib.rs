//! Orrery - N-body gravitational simulation core
//!
//! Advances N point masses under softened Newtonian gravity with a
//! caller-selectable integration scheme (explicit Euler, velocity Verlet,
//! RK4). Pure in-process computation: rendering, UI, and ephemeris
//! retrieval are external collaborators that populate the engine and query
//! positions through [`Simulation`].

pub mod bodies;
pub mod config;
pub mod error;
pub mod gravity;
pub mod integrator;
pub mod presets;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_physics;

pub use bodies::{Body, BodyStore};
pub use config::PhysicsConfig;
pub use error::SimulationError;
pub use integrator::Method;
pub use simulation::{Lifecycle, Simulation, Trajectory};
