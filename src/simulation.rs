//! Top-level simulation engine.
//!
//! [`Simulation`] is an explicit, passable value owning the body store, the
//! integrator scratch, and the physics configuration; multiple independent
//! simulations can coexist. All operations are synchronous and run to
//! completion; the host decides when to step.

use std::fmt;

use glam::DVec3;
use log::debug;

use crate::bodies::BodyStore;
use crate::config::PhysicsConfig;
use crate::error::{SimulationError, ensure_finite};
use crate::gravity::potential_energy;
use crate::integrator::{IntegratorScratch, Method, advance};

/// Engine lifecycle states.
///
/// `Uninitialized → Ready → (step)* → Released → Ready → …`
///
/// Stepping or querying outside `Ready` is an [`SimulationError::InvalidState`],
/// never a silent default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No body has ever been initialized
    #[default]
    Uninitialized,
    /// Populated; stepping and queries are valid
    Ready,
    /// All bodies released; must be re-populated before use
    Released,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Ready => "ready",
            Lifecycle::Released => "released",
        })
    }
}

/// Recorded position history of a batch run.
///
/// Frame 0 is the configuration before the first step, so a run of
/// `total_steps` steps yields `total_steps + 1` frames. The history lives
/// in memory and is returned by value; nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    frames: Vec<Vec<DVec3>>,
}

impl Trajectory {
    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All body positions at the given step.
    pub fn frame(&self, step: usize) -> Option<&[DVec3]> {
        self.frames.get(step).map(Vec::as_slice)
    }

    /// Position of one body at the given step.
    pub fn position(&self, step: usize, id: usize) -> Option<DVec3> {
        self.frames.get(step)?.get(id).copied()
    }
}

/// N-body simulation engine: body population, force model configuration,
/// and selectable integration method.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    store: BodyStore,
    scratch: IntegratorScratch,
    config: PhysicsConfig,
    lifecycle: Lifecycle,
}

impl Simulation {
    /// Engine with the default AU/day/kg physics configuration.
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            store: BodyStore::new(),
            scratch: IntegratorScratch::new(),
            config,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of live bodies.
    pub fn body_count(&self) -> usize {
        self.store.len()
    }

    /// Insert or overwrite the body at `id` and move the engine to `Ready`.
    ///
    /// Mass must be positive and finite; all components finite. Re-issuing
    /// an existing id replaces that body, it does not create a new one.
    pub fn init_body(
        &mut self,
        id: usize,
        mass: f64,
        pos: DVec3,
        vel: DVec3,
    ) -> Result<(), SimulationError> {
        self.store.init_body(id, mass, pos, vel)?;
        self.lifecycle = Lifecycle::Ready;
        Ok(())
    }

    /// Advance the system by exactly one step of size `dt` (days under the
    /// default convention; negative `dt` integrates backward).
    pub fn step(&mut self, method: Method, dt: f64) -> Result<(), SimulationError> {
        self.ensure_ready()?;
        ensure_nonzero_dt(dt)?;
        advance(method, &mut self.store, &self.config, &mut self.scratch, dt);
        Ok(())
    }

    /// Integer-coded entry point matching the external interface:
    /// `method` ∈ {0 = Euler, 1 = Verlet, 2 = RK4}. The method takes effect
    /// on this very call; switching between steps needs no re-initialization.
    pub fn step_by_code(&mut self, method: i32, dt: f64) -> Result<(), SimulationError> {
        let method = Method::from_code(method)?;
        self.step(method, dt)
    }

    /// Advance `total_steps` steps, recording every body's position after
    /// each one. Frame 0 holds the initial configuration.
    pub fn run(
        &mut self,
        method: Method,
        total_steps: usize,
        dt: f64,
    ) -> Result<Trajectory, SimulationError> {
        self.ensure_ready()?;
        ensure_nonzero_dt(dt)?;

        let mut frames = Vec::with_capacity(total_steps + 1);
        frames.push(self.snapshot());
        for _ in 0..total_steps {
            advance(method, &mut self.store, &self.config, &mut self.scratch, dt);
            frames.push(self.snapshot());
        }
        debug!(
            "completed {} {} steps of {} bodies",
            total_steps,
            method.name(),
            self.store.len()
        );
        Ok(Trajectory { frames })
    }

    /// Current position of the body at `id`, by value.
    pub fn position(&self, id: usize) -> Result<DVec3, SimulationError> {
        self.ensure_ready()?;
        self.store.position_of(id)
    }

    pub fn get_x(&self, id: usize) -> Result<f64, SimulationError> {
        Ok(self.position(id)?.x)
    }

    pub fn get_y(&self, id: usize) -> Result<f64, SimulationError> {
        Ok(self.position(id)?.y)
    }

    pub fn get_z(&self, id: usize) -> Result<f64, SimulationError> {
        Ok(self.position(id)?.z)
    }

    pub fn velocity(&self, id: usize) -> Result<DVec3, SimulationError> {
        self.ensure_ready()?;
        self.store.velocity_of(id)
    }

    pub fn mass(&self, id: usize) -> Result<f64, SimulationError> {
        self.ensure_ready()?;
        self.store.mass_of(id)
    }

    /// Release all bodies and scratch buffers. Idempotent; the engine must
    /// be re-populated via [`Simulation::init_body`] before stepping or
    /// querying again.
    pub fn release_all(&mut self) {
        self.store.release_all();
        self.scratch.release();
        self.lifecycle = Lifecycle::Released;
        debug!("released all bodies and integrator scratch");
    }

    /// Total linear momentum `Σ mᵢ·vᵢ`. Conserved by all three methods
    /// under zero net external force.
    pub fn total_momentum(&self) -> Result<DVec3, SimulationError> {
        self.ensure_ready()?;
        Ok(self
            .store
            .bodies()
            .iter()
            .map(|b| b.mass * b.vel)
            .sum())
    }

    /// Total kinetic energy `Σ ½·mᵢ·|vᵢ|²`.
    pub fn kinetic_energy(&self) -> Result<f64, SimulationError> {
        self.ensure_ready()?;
        Ok(self
            .store
            .bodies()
            .iter()
            .map(|b| 0.5 * b.mass * b.vel.length_squared())
            .sum())
    }

    /// Total gravitational potential energy, softened consistently with
    /// the force model.
    pub fn potential_energy(&self) -> Result<f64, SimulationError> {
        self.ensure_ready()?;
        Ok(potential_energy(self.store.bodies(), &self.config))
    }

    /// Total mechanical energy (kinetic + potential). Bounded drift under
    /// Verlet/RK4 is the crate's main correctness signal.
    pub fn total_energy(&self) -> Result<f64, SimulationError> {
        Ok(self.kinetic_energy()? + self.potential_energy()?)
    }

    fn ensure_ready(&self) -> Result<(), SimulationError> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            state => Err(SimulationError::InvalidState(state)),
        }
    }

    fn snapshot(&self) -> Vec<DVec3> {
        self.store.bodies().iter().map(|b| b.pos).collect()
    }
}

fn ensure_nonzero_dt(dt: f64) -> Result<(), SimulationError> {
    ensure_finite("dt", dt)?;
    if dt == 0.0 {
        return Err(SimulationError::InvalidParameter {
            name: "dt",
            requirement: "non-zero",
            value: dt,
        });
    }
    Ok(())
}
