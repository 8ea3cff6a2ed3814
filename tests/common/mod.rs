//! Common test utilities for integration tests.

// Each integration test binary compiles its own copy; not every binary
// uses every helper.
#![allow(dead_code)]

use glam::DVec3;
use orrery::presets::SUN_MASS;
use orrery::{PhysicsConfig, Simulation};

/// GM of the test central body in AU³/day².
pub fn gm_sun() -> f64 {
    PhysicsConfig::default().gravitational_constant * SUN_MASS
}

/// Orbital period in days for a semi-major axis in AU.
pub fn orbital_period(semi_major_axis_au: f64) -> f64 {
    std::f64::consts::TAU * (semi_major_axis_au.powi(3) / gm_sun()).sqrt()
}

/// Sun at the origin (id 0) plus a small body (id 1) on a circular orbit
/// at the given radius in AU, moving in the +y direction.
pub fn circular_pair(radius_au: f64) -> Simulation {
    let v = (gm_sun() / radius_au).sqrt();
    let mut sim = Simulation::new();
    sim.init_body(0, SUN_MASS, DVec3::ZERO, DVec3::ZERO).unwrap();
    sim.init_body(
        1,
        1.0e12,
        DVec3::new(radius_au, 0.0, 0.0),
        DVec3::new(0.0, v, 0.0),
    )
    .unwrap();
    sim
}

/// Relative drift of a conserved scalar.
pub fn relative_drift(initial: f64, current: f64) -> f64 {
    ((current - initial) / initial).abs()
}
