use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuselageConfig {
    /// Fuselage length (m).
    pub length: f64,
    /// Maximum diameter (m).
    pub max_diameter: f64,
    /// Correction for engine inlets; 1.0 for a clean fuselage.
    pub inlet_factor: f64,
}

impl Default for FuselageConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            max_diameter: 0.2,
            inlet_factor: 1.0,
        }
    }
}

impl FuselageConfig {
    pub fn new(length: f64, max_diameter: f64) -> Self {
        Self {
            length,
            max_diameter,
            ..Default::default()
        }
    }
}
