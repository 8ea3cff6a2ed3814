//! Property-based tests for the simulation engine.
//!
//! These verify physical invariants across ranges of orbital parameters
//! and random populations rather than single hand-picked cases.

use glam::DVec3;
use proptest::prelude::*;

use crate::integrator::Method;
use crate::simulation::Simulation;
use crate::test_utils::{assertions, fixtures};

/// Strategy: a populated engine with `n` random bodies in a few-AU cloud.
fn random_population(n: usize) -> impl Strategy<Value = Simulation> {
    let body = (
        1.0e20f64..1.0e27,
        -5.0f64..5.0,
        -5.0f64..5.0,
        -1.0f64..1.0,
        -0.01f64..0.01,
        -0.01f64..0.01,
        -0.01f64..0.01,
    );
    proptest::collection::vec(body, n).prop_map(|states| {
        let mut sim = Simulation::new();
        for (id, (mass, x, y, z, vx, vy, vz)) in states.into_iter().enumerate() {
            sim.init_body(id, mass, DVec3::new(x, y, z), DVec3::new(vx, vy, vz))
                .unwrap();
        }
        sim
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Pair forces are antisymmetric, so total momentum is conserved to
    /// floating-point tolerance by every method over many steps.
    #[test]
    fn prop_momentum_conserved_all_methods(
        sim in random_population(5),
        code in 0i32..3,
        dt in 0.01f64..1.0,
    ) {
        let mut sim = sim;
        let method = Method::from_code(code).unwrap();
        let initial = sim.total_momentum().unwrap();

        for _ in 0..20 {
            sim.step(method, dt).unwrap();
        }

        let drift = (sim.total_momentum().unwrap() - initial).length();
        // Scale tolerance by the total |m·v| the sums run over
        let scale: f64 = (0..sim.body_count())
            .map(|id| sim.mass(id).unwrap() * sim.velocity(id).unwrap().length())
            .sum();
        prop_assert!(
            drift <= scale * 1e-12 + 1e-9,
            "momentum drift {:.3e} (scale {:.3e}) under {}",
            drift, scale, method.name()
        );
    }

    /// Velocity Verlet is time-reversible: k steps of +dt followed by k
    /// steps of -dt return the system to its starting state.
    #[test]
    fn prop_verlet_time_reversible(
        radius_au in 0.3f64..5.0,
        dt in 0.05f64..0.5,
        steps in 1usize..30,
    ) {
        let mut sim = fixtures::circular_pair(radius_au);
        let start = sim.position(1).unwrap();

        for _ in 0..steps {
            sim.step(Method::VelocityVerlet, dt).unwrap();
        }
        for _ in 0..steps {
            sim.step(Method::VelocityVerlet, -dt).unwrap();
        }

        let returned = sim.position(1).unwrap();
        prop_assert!(
            (returned - start).length() < radius_au * 1e-9,
            "reversed trajectory ended {:.3e} AU from the start",
            (returned - start).length()
        );
    }

    /// Verlet keeps the energy of a circular orbit bounded over a full
    /// period at moderate resolution.
    #[test]
    fn prop_verlet_energy_bounded_one_orbit(
        radius_au in 0.5f64..3.0,
    ) {
        let mut sim = fixtures::circular_pair(radius_au);
        let initial = sim.total_energy().unwrap();

        let period = assertions::orbital_period(radius_au);
        let steps = 2000usize;
        let dt = period / steps as f64;
        for _ in 0..steps {
            sim.step(Method::VelocityVerlet, dt).unwrap();
        }

        let drift = assertions::relative_drift(initial, sim.total_energy().unwrap());
        prop_assert!(
            drift < 1e-3,
            "energy drift {:.3e} over one orbit at r = {} AU",
            drift, radius_au
        );
    }

    /// An elliptical orbit launched at perihelion keeps its energy bounded
    /// under Verlet through the fast perihelion passage and the slow
    /// aphelion arc alike.
    #[test]
    fn prop_elliptical_orbit_energy_bounded(
        perihelion_au in 0.5f64..2.0,
        eccentricity in 0.0f64..0.6,
    ) {
        let mut sim = fixtures::elliptical_pair(perihelion_au, eccentricity);
        let initial = sim.total_energy().unwrap();

        let a = perihelion_au / (1.0 - eccentricity);
        let steps = 4000usize;
        let dt = assertions::orbital_period(a) / steps as f64;
        for _ in 0..steps {
            sim.step(Method::VelocityVerlet, dt).unwrap();
        }

        let drift = assertions::relative_drift(initial, sim.total_energy().unwrap());
        prop_assert!(
            drift < 1e-2,
            "energy drift {:.3e} over one orbit (q = {} AU, e = {})",
            drift, perihelion_au, eccentricity
        );
    }

    /// Re-initializing an existing id replaces the body; the live count
    /// never changes and the new state is what subsequent queries see.
    #[test]
    fn prop_overwrite_replaces_not_duplicates(
        sim in random_population(4),
        id in 0usize..4,
        mass in 1.0e20f64..1.0e26,
        x in -3.0f64..3.0,
    ) {
        let mut sim = sim;
        let count = sim.body_count();
        sim.init_body(id, mass, DVec3::new(x, 0.0, 0.0), DVec3::ZERO).unwrap();
        prop_assert_eq!(sim.body_count(), count);
        prop_assert_eq!(sim.mass(id).unwrap(), mass);
        prop_assert_eq!(sim.position(id).unwrap(), DVec3::new(x, 0.0, 0.0));
    }
}
