//! Physical constants and the unit convention used by the simulation core.
//!
//! The crate works in astronomical units for distance, days for time, and
//! kilograms for mass, matching the ephemeris vectors callers typically feed
//! in (JPL Horizons `AU-D` output). The gravitational constant is rescaled
//! to that convention once, here, so the unit choice stays auditable.

/// Gravitational constant in SI units (m³·kg⁻¹·s⁻²)
pub const G_SI: f64 = 6.67430e-11;

/// Astronomical unit in meters
pub const AU_TO_METERS: f64 = 1.495978707e11;

/// Meters to AU
pub const METERS_TO_AU: f64 = 1.0 / AU_TO_METERS;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Gravitational constant in AU³·kg⁻¹·day⁻² (≈ 1.48819e-34).
///
/// Derived from the SI value rather than written as a literal so the
/// conversion is visible. Multiplied by the solar mass this gives
/// GM☉ ≈ 2.959e-4 AU³/day², the familiar Gaussian value.
pub const G_AU_DAY: f64 =
    G_SI * (SECONDS_PER_DAY * SECONDS_PER_DAY) / (AU_TO_METERS * AU_TO_METERS * AU_TO_METERS);
