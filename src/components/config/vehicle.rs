use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ConfigError, EstimatorConfig, Material, PayloadSpec, RawVehicleConfig};
use crate::components::StructuralSurface;
use crate::utils::Position;

/// Fixed placement of each structural part relative to the datum (m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralPositions {
    pub wing: Position,
    pub fuselage: Position,
    pub horizontal_tail: Position,
    pub vertical_tail: Position,
}

impl Default for StructuralPositions {
    fn default() -> Self {
        Self {
            wing: Position::new(0.5, 0.0, 0.0),
            fuselage: Position::new(0.5, 0.0, 0.0),
            horizontal_tail: Position::new(0.95, 0.0, 0.1),
            vertical_tail: Position::new(0.95, 0.0, 0.2),
        }
    }
}

impl StructuralPositions {
    pub fn get(&self, surface: StructuralSurface) -> Position {
        match surface {
            StructuralSurface::Wing => self.wing,
            StructuralSurface::Fuselage => self.fuselage,
            StructuralSurface::HorizontalTail => self.horizontal_tail,
            StructuralSurface::VerticalTail => self.vertical_tail,
        }
    }
}

/// Everything needed to build the initial component list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleConfig {
    /// Name of the vehicle, defaults to type name.
    pub name: String,
    pub vehicle_type: VehicleType,
    pub material: Material,
    pub estimator: EstimatorConfig,
    pub structural_positions: StructuralPositions,
    pub payload: Vec<PayloadSpec>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::from_programmed(VehicleType::SurveyUav)
    }
}

impl VehicleConfig {
    /// Creates a new vehicle configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Either a built-in vehicle (`Programmed`) or a YAML file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load.
    pub fn new(source: VehicleSource) -> Result<Self, ConfigError> {
        match source {
            VehicleSource::Programmed(vehicle_type) => Ok(Self::from_programmed(vehicle_type)),
            VehicleSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(vehicle_type: VehicleType) -> Self {
        let name = match &vehicle_type {
            VehicleType::SurveyUav => "SurveyUav".to_string(),
            VehicleType::Custom(name) => name.clone(),
        };
        let material = Material::default();

        Self {
            name,
            vehicle_type,
            material,
            estimator: EstimatorConfig::default().with_material(material),
            structural_positions: StructuralPositions::default(),
            payload: default_payload(),
        }
    }

    /// Reads a vehicle description from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawVehicleConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    fn from_raw_config(raw: RawVehicleConfig) -> Result<Self, ConfigError> {
        let estimator = raw.estimator.unwrap_or_default();

        // An explicit material wins over a density written inside the estimator block
        let (material, estimator) = match raw.material.as_deref() {
            Some(material) => {
                let material = material
                    .parse::<Material>()
                    .map_err(ConfigError::ValidationError)?;
                (material, estimator.with_material(material))
            }
            None => (Material::from_density(estimator.density), estimator),
        };

        Ok(Self {
            name: raw.name.clone(),
            vehicle_type: VehicleType::Custom(raw.name),
            material,
            estimator,
            structural_positions: raw.structural_positions.unwrap_or_default(),
            payload: raw.payload.unwrap_or_else(default_payload),
        })
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self.estimator = self.estimator.with_material(material);
        self
    }
}

/// Default payload set, all mounted at mid-fuselage.
fn default_payload() -> Vec<PayloadSpec> {
    let mount = Position::new(0.5, 0.0, 0.0);
    vec![
        PayloadSpec::new("Camera", 125.0, mount),
        PayloadSpec::new("LiDAR Sensor", 50.0, mount),
        PayloadSpec::new("GPS Module", 76.0, mount),
        PayloadSpec::new("Communication Module", 50.0, mount),
        PayloadSpec::new("Battery", 559.0, mount),
    ]
}

/// Source for vehicle configuration.
#[derive(Debug, Clone)]
pub enum VehicleSource {
    Programmed(VehicleType),
    File(PathBuf),
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    SurveyUav,
    Custom(String),
}
