//! Test utilities for the simulation engine.
//!
//! Fixtures build populated engines through the public API; assertions
//! provide the analytic quantities the physical invariants are checked
//! against.

use glam::DVec3;

use crate::config::PhysicsConfig;
use crate::presets::SUN_MASS;
use crate::simulation::Simulation;

/// Fixtures for creating test populations.
pub mod fixtures {
    use super::*;

    /// Sun-mass central body at rest at the origin (id 0) with a small body
    /// (id 1) on a circular orbit of the given radius in AU.
    ///
    /// The orbiter is placed on the positive x-axis with velocity in the +y
    /// direction; its mass is negligible next to the central mass, so the
    /// analytic two-body quantities apply directly.
    pub fn circular_pair(radius_au: f64) -> Simulation {
        let config = PhysicsConfig::default();
        let gm = config.gravitational_constant * SUN_MASS;
        let v = (gm / radius_au).sqrt();

        let mut sim = Simulation::with_config(config);
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

    /// Like [`circular_pair`] but starting at perihelion of an elliptical
    /// orbit with the given eccentricity.
    pub fn elliptical_pair(perihelion_au: f64, eccentricity: f64) -> Simulation {
        assert!(
            (0.0..1.0).contains(&eccentricity),
            "eccentricity must be in [0, 1) for a bound orbit"
        );
        let config = PhysicsConfig::default();
        let gm = config.gravitational_constant * SUN_MASS;
        let a = perihelion_au / (1.0 - eccentricity);
        // Vis-viva at perihelion
        let v = (gm * (2.0 / perihelion_au - 1.0 / a)).sqrt();

        let mut sim = Simulation::with_config(config);
        sim.init_body(0, SUN_MASS, DVec3::ZERO, DVec3::ZERO).unwrap();
        sim.init_body(
            1,
            1.0e12,
            DVec3::new(perihelion_au, 0.0, 0.0),
            DVec3::new(0.0, v, 0.0),
        )
        .unwrap();
        sim
    }
}

/// Analytic quantities for assertions.
pub mod assertions {
    use super::*;

    /// GM of the fixture central body in AU³/day².
    pub fn gm_central() -> f64 {
        PhysicsConfig::default().gravitational_constant * SUN_MASS
    }

    /// Orbital period in days for a semi-major axis in AU.
    pub fn orbital_period(semi_major_axis_au: f64) -> f64 {
        std::f64::consts::TAU * (semi_major_axis_au.powi(3) / gm_central()).sqrt()
    }

    /// Relative drift of a conserved scalar.
    pub fn relative_drift(initial: f64, current: f64) -> f64 {
        if initial.abs() > 1e-300 {
            ((current - initial) / initial).abs()
        } else {
            (current - initial).abs()
        }
    }
}
