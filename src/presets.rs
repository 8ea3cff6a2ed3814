//! Solar-system preset population.
//!
//! Mean Keplerian elements of the eight planets at the J2000 epoch
//! (NASA JPL approximate elements), turned into heliocentric state vectors
//! in the crate's AU / AU·day⁻¹ convention. This stands in for an external
//! ephemeris service when one is not wired up; the conversion is analytic,
//! so populations are deterministic and need no network or table files.

use glam::DVec3;

use crate::config::PhysicsConfig;
use crate::error::SimulationError;
use crate::simulation::Simulation;
use crate::types::DEG_TO_RAD;

/// Mass of the Sun in kilograms.
pub const SUN_MASS: f64 = 1.989e30;

/// Mean Keplerian elements of a planet at the J2000 epoch.
/// Distances in AU, angles in degrees.
#[derive(Clone, Copy, Debug)]
pub struct PlanetElements {
    pub name: &'static str,
    /// Mass in kilograms
    pub mass: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination to the ecliptic, degrees
    pub inclination_deg: f64,
    /// Longitude of the ascending node Ω, degrees
    pub ascending_node_deg: f64,
    /// Longitude of perihelion ϖ = Ω + ω, degrees
    pub perihelion_deg: f64,
    /// Mean longitude L = ϖ + M at J2000, degrees
    pub mean_longitude_deg: f64,
}

/// The eight planets, J2000 mean elements.
pub static PLANETS: &[PlanetElements] = &[
    PlanetElements {
        name: "Mercury",
        mass: 3.301e23,
        semi_major_axis: 0.38709893,
        eccentricity: 0.20563069,
        inclination_deg: 7.00487,
        ascending_node_deg: 48.33167,
        perihelion_deg: 77.45645,
        mean_longitude_deg: 252.25084,
    },
    PlanetElements {
        name: "Venus",
        mass: 4.868e24,
        semi_major_axis: 0.72333199,
        eccentricity: 0.00677323,
        inclination_deg: 3.39471,
        ascending_node_deg: 76.68069,
        perihelion_deg: 131.53298,
        mean_longitude_deg: 181.97973,
    },
    PlanetElements {
        name: "Earth",
        mass: 5.972e24,
        semi_major_axis: 1.00000011,
        eccentricity: 0.01671022,
        inclination_deg: 0.00005,
        ascending_node_deg: -11.26064,
        perihelion_deg: 102.94719,
        mean_longitude_deg: 100.46435,
    },
    PlanetElements {
        name: "Mars",
        mass: 6.417e23,
        semi_major_axis: 1.52366231,
        eccentricity: 0.09341233,
        inclination_deg: 1.85061,
        ascending_node_deg: 49.57854,
        perihelion_deg: 336.04084,
        mean_longitude_deg: 355.45332,
    },
    PlanetElements {
        name: "Jupiter",
        mass: 1.898e27,
        semi_major_axis: 5.20336301,
        eccentricity: 0.04839266,
        inclination_deg: 1.30530,
        ascending_node_deg: 100.55615,
        perihelion_deg: 14.75385,
        mean_longitude_deg: 34.40438,
    },
    PlanetElements {
        name: "Saturn",
        mass: 5.683e26,
        semi_major_axis: 9.53707032,
        eccentricity: 0.05415060,
        inclination_deg: 2.48446,
        ascending_node_deg: 113.71504,
        perihelion_deg: 92.43194,
        mean_longitude_deg: 49.94432,
    },
    PlanetElements {
        name: "Uranus",
        mass: 8.681e25,
        semi_major_axis: 19.19126393,
        eccentricity: 0.04716771,
        inclination_deg: 0.76986,
        ascending_node_deg: 74.22988,
        perihelion_deg: 170.96424,
        mean_longitude_deg: 313.23218,
    },
    PlanetElements {
        name: "Neptune",
        mass: 1.024e26,
        semi_major_axis: 30.06896348,
        eccentricity: 0.00858587,
        inclination_deg: 1.76917,
        ascending_node_deg: 131.72169,
        perihelion_deg: 44.97135,
        mean_longitude_deg: 304.88003,
    },
];

impl PlanetElements {
    /// Heliocentric state vector (position in AU, velocity in AU/day) at
    /// the J2000 epoch, for a Sun with gravitational parameter `gm_sun`
    /// (AU³/day²).
    pub fn state_vector(&self, gm_sun: f64) -> (DVec3, DVec3) {
        let a = self.semi_major_axis;
        let e = self.eccentricity;

        // Argument of perihelion and mean anomaly from the compound angles
        let omega = (self.perihelion_deg - self.ascending_node_deg) * DEG_TO_RAD;
        let mean_anomaly = (self.mean_longitude_deg - self.perihelion_deg) * DEG_TO_RAD;

        let e_anomaly = solve_eccentric_anomaly(mean_anomaly, e);
        let (sin_e, cos_e) = e_anomaly.sin_cos();

        // In-plane position: x toward perihelion
        let x_p = a * (cos_e - e);
        let y_p = a * (1.0 - e * e).sqrt() * sin_e;

        // In-plane velocity from dE/dt = n / (1 - e·cosE)
        let n = (gm_sun / (a * a * a)).sqrt(); // mean motion, rad/day
        let e_dot = n / (1.0 - e * cos_e);
        let vx_p = -a * sin_e * e_dot;
        let vy_p = a * (1.0 - e * e).sqrt() * cos_e * e_dot;

        // Rotate from the orbital plane to ecliptic coordinates (ω, i, Ω)
        let (sin_w, cos_w) = omega.sin_cos();
        let (sin_i, cos_i) = (self.inclination_deg * DEG_TO_RAD).sin_cos();
        let (sin_node, cos_node) = (self.ascending_node_deg * DEG_TO_RAD).sin_cos();

        let rotate = |x: f64, y: f64| {
            DVec3::new(
                (cos_node * cos_w - sin_node * sin_w * cos_i) * x
                    + (-cos_node * sin_w - sin_node * cos_w * cos_i) * y,
                (sin_node * cos_w + cos_node * sin_w * cos_i) * x
                    + (-sin_node * sin_w + cos_node * cos_w * cos_i) * y,
                sin_w * sin_i * x + cos_w * sin_i * y,
            )
        };

        (rotate(x_p, y_p), rotate(vx_p, vy_p))
    }
}

/// Solve Kepler's equation M = E - e·sin(E) for the eccentric anomaly E
/// using Newton's method. Converges quickly for planetary eccentricities
/// (all below 0.21 in the table above).
fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

    let mut e_anomaly = if eccentricity < 0.8 {
        m
    } else {
        std::f64::consts::PI
    };

    for _ in 0..50 {
        let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();
        let delta = f / f_prime;
        e_anomaly -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }

    e_anomaly
}

/// Build a simulation populated with the Sun (id 0) and the eight planets
/// (ids 1..=8, Mercury outward) at the J2000 epoch, using the default
/// AU/day/kg configuration. The Sun starts at rest at the origin.
pub fn solar_system() -> Result<Simulation, SimulationError> {
    let config = PhysicsConfig::default();
    let gm_sun = config.gravitational_constant * SUN_MASS;

    let mut sim = Simulation::with_config(config);
    sim.init_body(0, SUN_MASS, DVec3::ZERO, DVec3::ZERO)?;
    for (i, planet) in PLANETS.iter().enumerate() {
        let (pos, vel) = planet.state_vector(gm_sun);
        sim.init_body(i + 1, planet.mass, pos, vel)?;
    }
    Ok(sim)
}
