use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{is_finite_vector, CgError, GRAMS_PER_KG};

/// The four airframe parts whose weight comes from the structural estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralSurface {
    Wing,
    Fuselage,
    HorizontalTail,
    VerticalTail,
}

impl StructuralSurface {
    pub const ALL: [StructuralSurface; 4] = [
        StructuralSurface::Wing,
        StructuralSurface::Fuselage,
        StructuralSurface::HorizontalTail,
        StructuralSurface::VerticalTail,
    ];

    /// Name of the component record this surface writes into.
    pub fn component_name(&self) -> &'static str {
        match self {
            StructuralSurface::Wing => "Wing",
            StructuralSurface::Fuselage => "Fuselage",
            StructuralSurface::HorizontalTail => "Horizontal Tail",
            StructuralSurface::VerticalTail => "Vertical Tail",
        }
    }

    pub fn from_component_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|surface| surface.component_name() == name)
    }
}

impl fmt::Display for StructuralSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Weight is computed by the structural estimator.
    Structural(StructuralSurface),
    /// Weight is entered by the operator.
    Payload,
}

impl ComponentKind {
    pub fn is_structural(&self) -> bool {
        matches!(self, ComponentKind::Structural(_))
    }
}

/// A single mass item of the vehicle.
///
/// Only the weight in grams is stored; the kilogram value is derived on read so
/// the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    name: String,
    kind: ComponentKind,
    weight_grams: f64,
    /// Placement relative to the vehicle datum (m).
    position: Vector3<f64>,
}

impl Component {
    /// Creates a validated component record.
    ///
    /// # Errors
    /// `CgError::InvalidComponent` if the name is blank, the weight is negative
    /// or not finite, or any axis of the position is not finite.
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        weight_grams: f64,
        position: Vector3<f64>,
    ) -> Result<Self, CgError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CgError::InvalidComponent(
                "component name must not be empty".to_string(),
            ));
        }
        validate_weight(&name, weight_grams)?;
        validate_position(&name, &position)?;

        Ok(Self {
            name,
            kind,
            weight_grams,
            position,
        })
    }

    pub fn payload(
        name: impl Into<String>,
        weight_grams: f64,
        position: Vector3<f64>,
    ) -> Result<Self, CgError> {
        Self::new(name, ComponentKind::Payload, weight_grams, position)
    }

    /// Structural placeholder named after its surface.
    pub fn structural(
        surface: StructuralSurface,
        weight_grams: f64,
        position: Vector3<f64>,
    ) -> Result<Self, CgError> {
        Self::new(
            surface.component_name(),
            ComponentKind::Structural(surface),
            weight_grams,
            position,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn weight_grams(&self) -> f64 {
        self.weight_grams
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_grams / GRAMS_PER_KG
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_weight_grams(&mut self, weight_grams: f64) -> Result<(), CgError> {
        validate_weight(&self.name, weight_grams)?;
        self.weight_grams = weight_grams;
        Ok(())
    }

    pub(crate) fn set_position(&mut self, position: Vector3<f64>) -> Result<(), CgError> {
        validate_position(&self.name, &position)?;
        self.position = position;
        Ok(())
    }
}

fn validate_weight(name: &str, weight_grams: f64) -> Result<(), CgError> {
    if !weight_grams.is_finite() || weight_grams < 0.0 {
        return Err(CgError::InvalidComponent(format!(
            "{}: weight must be a finite, non-negative number of grams (got {})",
            name, weight_grams
        )));
    }
    Ok(())
}

fn validate_position(name: &str, position: &Vector3<f64>) -> Result<(), CgError> {
    if !is_finite_vector(position) {
        return Err(CgError::InvalidComponent(format!(
            "{}: position must be finite (got [{}, {}, {}])",
            name, position.x, position.y, position.z
        )));
    }
    Ok(())
}
