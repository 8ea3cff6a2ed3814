//! Fixed-step time integrators for the N-body system.
//!
//! Three interchangeable stepping strategies advance the full body set by
//! exactly one step of size `dt` (days under the default unit convention):
//!
//! - explicit Euler: one force evaluation, first-order, secular energy
//!   drift, offered as the cheap baseline;
//! - velocity Verlet: two force evaluations, second-order, symplectic,
//!   conserves energy and momentum over long horizons;
//! - RK4: four force evaluations over the joint (position, velocity) state,
//!   highest accuracy per step.
//!
//! The sign of `dt` determines the direction of time; negative steps
//! integrate backward consistently.

use glam::DVec3;

use crate::bodies::{Body, BodyStore};
use crate::config::PhysicsConfig;
use crate::error::SimulationError;
use crate::gravity::accumulate_accelerations;

/// Integration scheme selector.
///
/// The wire-level method codes 0/1/2 of the external interface map onto
/// these variants through [`Method::from_code`]; adding a fourth scheme
/// requires no change to calling code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Explicit forward Euler (first order)
    Euler,
    /// Velocity Verlet (second order, symplectic)
    VelocityVerlet,
    /// Classic four-stage Runge–Kutta (fourth order)
    Rk4,
}

impl Method {
    /// Resolve an integer method code. Codes outside {0, 1, 2} fail fast
    /// with `InvalidMethod`; there is no silent fallback.
    pub fn from_code(code: i32) -> Result<Self, SimulationError> {
        match code {
            0 => Ok(Method::Euler),
            1 => Ok(Method::VelocityVerlet),
            2 => Ok(Method::Rk4),
            other => Err(SimulationError::InvalidMethod(other)),
        }
    }

    /// The integer code of this method in the external interface.
    pub fn code(self) -> i32 {
        match self {
            Method::Euler => 0,
            Method::VelocityVerlet => 1,
            Method::Rk4 => 2,
        }
    }

    /// Order of accuracy.
    pub fn order(self) -> usize {
        match self {
            Method::Euler => 1,
            Method::VelocityVerlet => 2,
            Method::Rk4 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "explicit Euler",
            Method::VelocityVerlet => "velocity Verlet",
            Method::Rk4 => "RK4",
        }
    }
}

/// Per-body time derivative of the joint (position, velocity) state:
/// d(pos)/dt = vel, d(vel)/dt = acceleration.
#[derive(Clone, Copy, Debug, Default)]
struct Derivative {
    dpos: DVec3,
    dvel: DVec3,
}

/// Reusable integrator scratch, sized to the current body count.
///
/// Holds the shared acceleration buffer, the Verlet acceleration cache, and
/// the RK4 stage buffers. Buffers are resized on demand; the Verlet cache
/// carries the store revision at which it was produced and is dropped
/// whenever the population has been mutated since, so re-initialized bodies
/// never see accelerations computed against a previous population.
#[derive(Clone, Debug, Default)]
pub struct IntegratorScratch {
    accel: Vec<DVec3>,
    verlet_acc: Vec<DVec3>,
    verlet_valid_at: Option<u64>,
    stage: Vec<Body>,
    k1: Vec<Derivative>,
    k2: Vec<Derivative>,
    k3: Vec<Derivative>,
    k4: Vec<Derivative>,
}

impl IntegratorScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all buffers (bulk release alongside the body store).
    pub fn release(&mut self) {
        *self = Self::default();
    }

    fn ensure_capacity(&mut self, n: usize) {
        if self.accel.len() != n {
            self.accel.resize(n, DVec3::ZERO);
            self.verlet_acc.resize(n, DVec3::ZERO);
            self.verlet_valid_at = None;
            self.stage.resize(n, Body::default());
            self.k1.resize(n, Derivative::default());
            self.k2.resize(n, Derivative::default());
            self.k3.resize(n, Derivative::default());
            self.k4.resize(n, Derivative::default());
        }
    }
}

/// Advance the whole system by one step of size `dt` using `method`.
///
/// Zero live bodies is a no-op. The store revision is bumped on completion
/// so position queries and caches can distinguish configurations.
pub fn advance(
    method: Method,
    store: &mut BodyStore,
    config: &PhysicsConfig,
    scratch: &mut IntegratorScratch,
    dt: f64,
) {
    if store.is_empty() {
        return;
    }
    scratch.ensure_capacity(store.len());
    match method {
        Method::Euler => euler(store, config, scratch, dt),
        Method::VelocityVerlet => verlet(store, config, scratch, dt),
        Method::Rk4 => rk4(store, config, scratch, dt),
    }
}

/// Explicit forward Euler: `v' = v + a·dt`, `x' = x + v·dt` with the
/// pre-update velocity. One force evaluation.
fn euler(store: &mut BodyStore, config: &PhysicsConfig, scratch: &mut IntegratorScratch, dt: f64) {
    accumulate_accelerations(store.bodies(), config, &mut scratch.accel);

    for (b, a) in store.bodies_mut().iter_mut().zip(scratch.accel.iter()) {
        let v0 = b.vel;
        b.vel += *a * dt;
        b.pos += v0 * dt;
    }
    store.touch();
}

/// Velocity Verlet:
/// `x' = x + v·dt + ½·a0·dt²`, `a1 = F(x')`, `v' = v + ½·(a0 + a1)·dt`.
///
/// The closing acceleration `a1` doubles as the next step's `a0` when the
/// population is untouched in between, bringing the steady-state cost down
/// to one fresh force evaluation per step.
fn verlet(store: &mut BodyStore, config: &PhysicsConfig, scratch: &mut IntegratorScratch, dt: f64) {
    // a0: reuse the cached closing acceleration when still valid
    if scratch.verlet_valid_at != Some(store.revision()) {
        accumulate_accelerations(store.bodies(), config, &mut scratch.verlet_acc);
    }

    let half_dt = 0.5 * dt;
    let half_dt2 = 0.5 * dt * dt;

    for (b, a0) in store.bodies_mut().iter_mut().zip(scratch.verlet_acc.iter()) {
        b.pos += b.vel * dt + *a0 * half_dt2;
    }

    // a1 at the new positions
    accumulate_accelerations(store.bodies(), config, &mut scratch.accel);

    for ((b, a0), a1) in store
        .bodies_mut()
        .iter_mut()
        .zip(scratch.verlet_acc.iter())
        .zip(scratch.accel.iter())
    {
        b.vel += (*a0 + *a1) * half_dt;
    }

    // Carry a1 into the cache for the next step
    std::mem::swap(&mut scratch.verlet_acc, &mut scratch.accel);
    store.touch();
    scratch.verlet_valid_at = Some(store.revision());
}

/// Classic four-stage Runge–Kutta over the joint (position, velocity)
/// state, stage weights 1:2:2:1 over 6. The force field is re-evaluated at
/// every stage since stage positions differ.
fn rk4(store: &mut BodyStore, config: &PhysicsConfig, scratch: &mut IntegratorScratch, dt: f64) {
    let IntegratorScratch {
        accel,
        stage,
        k1,
        k2,
        k3,
        k4,
        ..
    } = scratch;
    let bodies = store.bodies();
    let half_dt = 0.5 * dt;

    // k1 at the current state
    accumulate_accelerations(bodies, config, accel);
    for ((k, b), a) in k1.iter_mut().zip(bodies).zip(accel.iter()) {
        *k = Derivative {
            dpos: b.vel,
            dvel: *a,
        };
    }

    // k2 at the state advanced by dt/2 along k1
    for ((s, b), k) in stage.iter_mut().zip(bodies).zip(k1.iter()) {
        s.pos = b.pos + k.dpos * half_dt;
        s.vel = b.vel + k.dvel * half_dt;
        s.mass = b.mass;
    }
    accumulate_accelerations(stage, config, accel);
    for ((k, s), a) in k2.iter_mut().zip(stage.iter()).zip(accel.iter()) {
        *k = Derivative {
            dpos: s.vel,
            dvel: *a,
        };
    }

    // k3 at the state advanced by dt/2 along k2
    for ((s, b), k) in stage.iter_mut().zip(bodies).zip(k2.iter()) {
        s.pos = b.pos + k.dpos * half_dt;
        s.vel = b.vel + k.dvel * half_dt;
    }
    accumulate_accelerations(stage, config, accel);
    for ((k, s), a) in k3.iter_mut().zip(stage.iter()).zip(accel.iter()) {
        *k = Derivative {
            dpos: s.vel,
            dvel: *a,
        };
    }

    // k4 at the state advanced by a full dt along k3
    for ((s, b), k) in stage.iter_mut().zip(bodies).zip(k3.iter()) {
        s.pos = b.pos + k.dpos * dt;
        s.vel = b.vel + k.dvel * dt;
    }
    accumulate_accelerations(stage, config, accel);
    for ((k, s), a) in k4.iter_mut().zip(stage.iter()).zip(accel.iter()) {
        *k = Derivative {
            dpos: s.vel,
            dvel: *a,
        };
    }

    // Weighted combination
    let w = dt / 6.0;
    for (i, b) in store.bodies_mut().iter_mut().enumerate() {
        b.pos += w * (k1[i].dpos + 2.0 * (k2[i].dpos + k3[i].dpos) + k4[i].dpos);
        b.vel += w * (k1[i].dvel + 2.0 * (k2[i].dvel + k3[i].dvel) + k4[i].dvel);
    }
    store.touch();
}
