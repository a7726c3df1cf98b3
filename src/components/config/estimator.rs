use serde::{Deserialize, Serialize};

use super::{FuselageConfig, LiftingSurfaceConfig, Material};

/// Vertical tail inputs beyond the common lifting surface parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalTailConfig {
    pub surface: LiftingSurfaceConfig,
    /// Vertical tail volume coefficient, V̄_V.
    pub volume_coefficient: f64,
    /// Tip-to-root thickness ratio correction, C_T / C_V.
    pub thickness_correction: f64,
}

impl Default for VerticalTailConfig {
    fn default() -> Self {
        Self {
            surface: LiftingSurfaceConfig::vertical_tail(),
            volume_coefficient: 0.04,
            thickness_correction: 1.0,
        }
    }
}

/// Every parameter the structural weight estimator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub wing: LiftingSurfaceConfig,
    pub fuselage: FuselageConfig,
    pub horizontal_tail: LiftingSurfaceConfig,
    pub vertical_tail: VerticalTailConfig,
    /// Structural material density (kg/m³).
    pub density: f64,
    /// Density correction, K_ρ.
    pub density_factor: f64,
    /// Ultimate load factor, n_ult.
    pub ultimate_load_factor: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            wing: LiftingSurfaceConfig::wing(),
            fuselage: FuselageConfig::default(),
            horizontal_tail: LiftingSurfaceConfig::horizontal_tail(),
            vertical_tail: VerticalTailConfig::default(),
            density: Material::default().density(),
            density_factor: 1.0,
            ultimate_load_factor: 3.8,
        }
    }
}

impl EstimatorConfig {
    pub fn with_material(mut self, material: Material) -> Self {
        self.density = material.density();
        self
    }

    /// Spans and chords derived from area and aspect ratio.
    pub fn derived_geometry(&self) -> DerivedGeometry {
        DerivedGeometry {
            wing_span: self.wing.span(),
            wing_chord: self.wing.mean_chord(),
            horizontal_tail_span: self.horizontal_tail.span(),
            horizontal_tail_chord: self.horizontal_tail.mean_chord(),
            vertical_tail_height: self.vertical_tail.surface.span(),
            vertical_tail_chord: self.vertical_tail.surface.mean_chord(),
        }
    }
}

/// Derived dimensions (m). Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedGeometry {
    pub wing_span: f64,
    pub wing_chord: f64,
    pub horizontal_tail_span: f64,
    pub horizontal_tail_chord: f64,
    pub vertical_tail_height: f64,
    pub vertical_tail_chord: f64,
}
