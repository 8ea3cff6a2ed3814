//! Body storage arena for the simulation engine.
//!
//! Bodies are indexed by dense caller-assigned ids. The arena tracks a
//! monotone revision counter, bumped on every mutation, which integrator
//! scratch uses as an epoch marker: caches produced against one population
//! are never silently reused against another.

use glam::DVec3;

use crate::error::{SimulationError, ensure_finite};

/// Physical state of a body in the simulation.
/// Uses f64 (DVec3) for accuracy over solar-system scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    /// Position in the caller's distance unit (AU by default convention)
    pub pos: DVec3,
    /// Velocity in distance per time unit (AU/day by default)
    pub vel: DVec3,
    /// Mass in kilograms
    pub mass: f64,
}

impl Body {
    /// Create a new body state.
    pub fn new(pos: DVec3, vel: DVec3, mass: f64) -> Self {
        Self { pos, vel, mass }
    }
}

/// Growable id-indexed arena of bodies.
#[derive(Clone, Debug, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    revision: u64,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live bodies (allocated slots).
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Epoch marker: changes whenever the population is mutated.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record a mutation of the body set (called by integrators after a
    /// completed step).
    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }

    /// Insert or overwrite the body at `id`. Storage grows so that capacity
    /// is at least `id + 1`; slots opened by growth but never explicitly
    /// initialized hold inert zero-mass bodies until overwritten.
    ///
    /// Re-issuing an existing id replaces that body's state in place; the
    /// live count is unchanged.
    pub fn init_body(
        &mut self,
        id: usize,
        mass: f64,
        pos: DVec3,
        vel: DVec3,
    ) -> Result<(), SimulationError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidParameter {
                name: "mass",
                requirement: "positive and finite",
                value: mass,
            });
        }
        ensure_finite("x", pos.x)?;
        ensure_finite("y", pos.y)?;
        ensure_finite("z", pos.z)?;
        ensure_finite("vx", vel.x)?;
        ensure_finite("vy", vel.y)?;
        ensure_finite("vz", vel.z)?;

        if id >= self.bodies.len() {
            self.bodies.resize_with(id + 1, Body::default);
        }
        self.bodies[id] = Body::new(pos, vel, mass);
        self.touch();
        Ok(())
    }

    /// Drop all bodies and reset the live count to zero. Idempotent:
    /// releasing an already-empty store is a no-op.
    pub fn release_all(&mut self) {
        if !self.bodies.is_empty() {
            self.bodies = Vec::new();
            self.touch();
        }
    }

    pub fn position_of(&self, id: usize) -> Result<DVec3, SimulationError> {
        self.get(id).map(|b| b.pos)
    }

    pub fn velocity_of(&self, id: usize) -> Result<DVec3, SimulationError> {
        self.get(id).map(|b| b.vel)
    }

    pub fn mass_of(&self, id: usize) -> Result<f64, SimulationError> {
        self.get(id).map(|b| b.mass)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Crate-internal: callers must call [`BodyStore::touch`] after
    /// mutating through this slice so epoch-tagged caches see the change.
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    fn get(&self, id: usize) -> Result<&Body, SimulationError> {
        self.bodies.get(id).ok_or(SimulationError::InvalidId {
            id,
            live: self.bodies.len(),
        })
    }
}
