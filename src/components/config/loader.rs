use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{EstimatorConfig, StructuralPositions};
use crate::utils::Position;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid vehicle configuration: {0}")]
    ValidationError(String),
}

/// Payload entry as written in a vehicle file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PayloadSpec {
    pub name: String,
    pub weight_grams: f64,
    #[serde(default)]
    pub position: Position,
}

impl PayloadSpec {
    pub fn new(name: impl Into<String>, weight_grams: f64, position: Position) -> Self {
        Self {
            name: name.into(),
            weight_grams,
            position,
        }
    }
}

/// On-disk shape of a vehicle file. Everything except the name is optional.
#[derive(Debug, Deserialize)]
pub struct RawVehicleConfig {
    pub name: String,

    /// Preset name ("Aluminum", "Carbon Fiber", ...) or a density in kg/m³.
    #[serde(default)]
    pub material: Option<String>,

    #[serde(default)]
    pub estimator: Option<EstimatorConfig>,

    #[serde(default)]
    pub structural_positions: Option<StructuralPositions>,

    /// Replaces the default payload set when present.
    #[serde(default)]
    pub payload: Option<Vec<PayloadSpec>>,
}
