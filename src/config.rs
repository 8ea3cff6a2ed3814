//! Physics configuration.
//!
//! The gravitational constant and softening length are explicit,
//! serializable values rather than literals buried in the force kernel, so
//! the unit convention stays auditable and a deployment can override it
//! from a TOML file.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::types::{G_AU_DAY, G_SI};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravitational constant, in units consistent with the caller's
    /// position/velocity/mass/time units. Default: AU³·kg⁻¹·day⁻².
    pub gravitational_constant: f64,
    /// Softening length ε, in the caller's distance unit. Added in
    /// quadrature to squared separations so the force stays bounded as two
    /// bodies approach each other. Default: 1e-5 AU (~1500 km), far below
    /// any realistic planetary separation.
    pub softening_length: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G_AU_DAY,
            softening_length: 1e-5,
        }
    }
}

impl PhysicsConfig {
    /// Configuration for callers working in SI units throughout
    /// (meters, seconds, kilograms). Softening defaults to 1000 km.
    pub fn si() -> Self {
        Self {
            gravitational_constant: G_SI,
            softening_length: 1.0e6,
        }
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// doesn't exist or doesn't parse.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
