//! Error taxonomy for the simulation engine.
//!
//! Every variant is a deterministic, locally-detectable contract violation.
//! Errors abort only the offending call; the engine's existing valid state
//! is left untouched. Numerical near-singularities are not errors, they are
//! handled structurally by the softening length in the force model.

use crate::simulation::Lifecycle;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    #[error("body id {id} is outside the live range ({live} bodies)")]
    InvalidId { id: usize, live: usize },

    #[error("unknown integration method code {0} (valid: 0 = Euler, 1 = Verlet, 2 = RK4)")]
    InvalidMethod(i32),

    #[error("operation requires a populated engine (lifecycle state: {0})")]
    InvalidState(Lifecycle),

    #[error("{name} must be {requirement}, got {value}")]
    InvalidParameter {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

impl SimulationError {
    /// Build an `InvalidParameter` for a value that must be finite.
    pub(crate) fn non_finite(name: &'static str, value: f64) -> Self {
        SimulationError::InvalidParameter {
            name,
            requirement: "finite",
            value,
        }
    }
}

/// Check a single scalar input for NaN/infinity.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::non_finite(name, value))
    }
}
