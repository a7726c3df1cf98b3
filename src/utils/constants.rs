/// Gravitational acceleration used by the structural weight model (m/s^2).
///
/// The empirical sizing formulas are calibrated against this rounded value,
/// not the standard 9.80665.
pub const STRUCTURAL_GRAVITY: f64 = 9.81;

pub const GRAMS_PER_KG: f64 = 1000.0;

// Below this magnitude cos(sweep) is treated as zero
pub const MIN_SWEEP_COSINE: f64 = 1e-9;

// Material densities (kg/m^3)
pub const CARBON_FIBER_DENSITY: f64 = 1600.0;
pub const ALUMINUM_DENSITY: f64 = 2700.0;
pub const FOAM_DENSITY: f64 = 100.0;
pub const PLASTIC_DENSITY: f64 = 1200.0;
