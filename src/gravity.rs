//! Softened pairwise Newtonian gravity.
//!
//! Direct O(n²) summation over unordered body pairs. Each pair is computed
//! once and applied to both bodies with opposite sign (Newton's third law),
//! which halves the work and keeps the force contributions exactly
//! antisymmetric, so total momentum is conserved to floating-point
//! tolerance by every integrator built on top of this kernel.

use glam::DVec3;

use crate::bodies::Body;
use crate::config::PhysicsConfig;

/// Accumulate gravitational accelerations for all bodies into `out`.
///
/// `out[i]` is overwritten with the total acceleration on body `i` from all
/// other bodies at the instantaneous configuration in `bodies`:
///
/// `a_i = Σ_j G·m_j·(p_j − p_i) / (|p_j − p_i|² + ε²)^(3/2)`
///
/// The softening length ε bounds the force as two bodies approach each
/// other; near-coincident bodies produce large but finite accelerations,
/// never NaN or infinity.
pub fn accumulate_accelerations(bodies: &[Body], config: &PhysicsConfig, out: &mut [DVec3]) {
    debug_assert_eq!(bodies.len(), out.len());

    for a in out.iter_mut() {
        *a = DVec3::ZERO;
    }

    let g = config.gravitational_constant;
    let eps2 = config.softening_length * config.softening_length;
    let n = bodies.len();

    for i in 0..n {
        let xi = bodies[i].pos;
        let mi = bodies[i].mass;

        for j in (i + 1)..n {
            // Displacement from i to j: i is pulled along +r, j along -r
            let r = bodies[j].pos - xi;

            // Softened squared separation
            let d2 = r.length_squared() + eps2;

            let inv_r = d2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;
            let coef = g * inv_r3;

            out[i] += coef * bodies[j].mass * r;
            out[j] -= coef * mi * r;
        }
    }
}

/// Total gravitational potential energy of the configuration.
///
/// Uses the same softened separation as the force kernel so the energy is
/// consistent with the accelerations the integrators see.
pub fn potential_energy(bodies: &[Body], config: &PhysicsConfig) -> f64 {
    let g = config.gravitational_constant;
    let eps2 = config.softening_length * config.softening_length;
    let n = bodies.len();

    let mut potential = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d2 = (bodies[j].pos - bodies[i].pos).length_squared() + eps2;
            potential -= g * bodies[i].mass * bodies[j].mass / d2.sqrt();
        }
    }
    potential
}
