use nalgebra::Vector3;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::components::{ComponentKind, DerivedGeometry};
use crate::systems::CgAggregator;
use crate::utils::CgError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One row of the component table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRow {
    pub name: String,
    pub kind: ComponentKind,
    pub weight_grams: f64,
    pub weight_kg: f64,
    pub position: Vector3<f64>,
}

/// Snapshot handed to whatever renders the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassReport {
    pub vehicle: String,
    pub components: Vec<ComponentRow>,
    pub total_weight_kg: f64,
    /// `None` when the total weight is zero.
    pub cg: Option<Vector3<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<DerivedGeometry>,
}

impl MassReport {
    /// Snapshot of the list and its CG. A zero total weight gives `cg: None`;
    /// any other failure is returned.
    pub fn from_aggregator(
        vehicle: impl Into<String>,
        aggregator: &CgAggregator,
    ) -> Result<Self, CgError> {
        let components: Vec<ComponentRow> = aggregator
            .components()
            .iter()
            .map(|c| ComponentRow {
                name: c.name().to_string(),
                kind: c.kind(),
                weight_grams: c.weight_grams(),
                weight_kg: c.weight_kg(),
                position: c.position(),
            })
            .collect();

        let (total_weight_kg, cg) = match aggregator.compute_cg() {
            Ok(result) => (result.total_weight_kg, Some(result.cg)),
            Err(CgError::DivisionByZero) => (0.0, None),
            Err(err) => return Err(err),
        };

        Ok(Self {
            vehicle: vehicle.into(),
            components,
            total_weight_kg,
            cg,
            geometry: None,
        })
    }

    pub fn with_geometry(mut self, geometry: DerivedGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String, ReportError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the report as YAML or JSON, picked by file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => self.to_yaml()?,
            _ => self.to_json()?,
        };
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl fmt::Display for MassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle: {}", self.vehicle)?;
        writeln!(
            f,
            "{:<24} {:>10} {:>8} {:>8} {:>8}",
            "Component", "Weight (g)", "x (m)", "y (m)", "z (m)"
        )?;
        for row in &self.components {
            writeln!(
                f,
                "{:<24} {:>10.2} {:>8.3} {:>8.3} {:>8.3}",
                row.name, row.weight_grams, row.position.x, row.position.y, row.position.z
            )?;
        }

        if let Some(geometry) = &self.geometry {
            writeln!(
                f,
                "Wing span: {:.3} m, chord: {:.3} m",
                geometry.wing_span, geometry.wing_chord
            )?;
            writeln!(
                f,
                "Horizontal tail span: {:.3} m, vertical tail height: {:.3} m",
                geometry.horizontal_tail_span, geometry.vertical_tail_height
            )?;
        }

        writeln!(
            f,
            "Total Weight: {:.2} g ({:.3} kg)",
            self.total_weight_kg * 1000.0,
            self.total_weight_kg
        )?;
        match self.cg {
            Some(cg) => write!(
                f,
                "Center of Gravity (CG): X = {:.4} m, Y = {:.4} m, Z = {:.4} m",
                cg.x, cg.y, cg.z
            ),
            None => write!(f, "Center of Gravity (CG): undefined (total weight is zero)"),
        }
    }
}
