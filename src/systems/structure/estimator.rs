use tracing::debug;

use crate::components::{EstimatorConfig, FuselageConfig, LiftingSurfaceConfig, StructuralSurface};
use crate::utils::{deg_to_rad, CgError, MIN_SWEEP_COSINE, STRUCTURAL_GRAVITY};

/// Empirical structural weight model for small airframes.
///
/// Every method is a pure function of the configuration. The exponents and the
/// gravity factor are part of the model's calibration and must not be folded.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralWeightEstimator;

impl StructuralWeightEstimator {
    /// `S·MAC·(t/c)·ρ·K_ρ · ((AR·n_ult)/cos Λ)^0.6 · λ^0.04 · g`
    pub fn wing_weight(config: &EstimatorConfig) -> Result<f64, CgError> {
        let wing = &config.wing;
        let sweep_cos = sweep_cosine(StructuralSurface::Wing, wing)?;

        let weight = section_mass(wing, config)
            * ((wing.aspect_ratio * config.ultimate_load_factor) / sweep_cos).powf(0.6)
            * wing.taper_ratio.powf(0.04)
            * STRUCTURAL_GRAVITY;

        finite_or_degenerate(StructuralSurface::Wing, weight)
    }

    /// `L_f·D_max²·ρ·K_ρ · n_ult^0.25 · K_inlet · g`
    pub fn fuselage_weight(config: &EstimatorConfig) -> Result<f64, CgError> {
        let FuselageConfig {
            length,
            max_diameter,
            inlet_factor,
        } = config.fuselage;

        let weight = length
            * max_diameter.powi(2)
            * config.density
            * config.density_factor
            * config.ultimate_load_factor.powf(0.25)
            * inlet_factor
            * STRUCTURAL_GRAVITY;

        finite_or_degenerate(StructuralSurface::Fuselage, weight)
    }

    /// `S·MAC·(t/c)·ρ·K_ρ · (AR/cos Λ)^0.6 · λ^0.04 · g`
    pub fn horizontal_tail_weight(config: &EstimatorConfig) -> Result<f64, CgError> {
        let tail = &config.horizontal_tail;
        let sweep_cos = sweep_cosine(StructuralSurface::HorizontalTail, tail)?;

        let weight = section_mass(tail, config)
            * (tail.aspect_ratio / sweep_cos).powf(0.6)
            * tail.taper_ratio.powf(0.04)
            * STRUCTURAL_GRAVITY;

        finite_or_degenerate(StructuralSurface::HorizontalTail, weight)
    }

    /// `S·MAC·(t/c)·ρ·K_ρ · (AR/cos Λ)^0.6 · λ^0.04 · V̄_V^0.2 · (C_T/C_V)^0.4 · g`
    pub fn vertical_tail_weight(config: &EstimatorConfig) -> Result<f64, CgError> {
        let vertical = &config.vertical_tail;
        let tail = &vertical.surface;
        let sweep_cos = sweep_cosine(StructuralSurface::VerticalTail, tail)?;

        let weight = section_mass(tail, config)
            * (tail.aspect_ratio / sweep_cos).powf(0.6)
            * tail.taper_ratio.powf(0.04)
            * vertical.volume_coefficient.powf(0.2)
            * vertical.thickness_correction.powf(0.4)
            * STRUCTURAL_GRAVITY;

        finite_or_degenerate(StructuralSurface::VerticalTail, weight)
    }

    /// Runs all four formulas. A degenerate surface does not hide the others.
    pub fn estimate(config: &EstimatorConfig) -> StructuralWeights {
        let weights = StructuralWeights {
            wing: Self::wing_weight(config),
            fuselage: Self::fuselage_weight(config),
            horizontal_tail: Self::horizontal_tail_weight(config),
            vertical_tail: Self::vertical_tail_weight(config),
        };
        debug!("Structural estimate: {:?}", weights);
        weights
    }
}

/// Estimated mass (kg) per surface; `Err` marks a surface as unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralWeights {
    pub wing: Result<f64, CgError>,
    pub fuselage: Result<f64, CgError>,
    pub horizontal_tail: Result<f64, CgError>,
    pub vertical_tail: Result<f64, CgError>,
}

impl StructuralWeights {
    pub fn get(&self, surface: StructuralSurface) -> Result<f64, CgError> {
        match surface {
            StructuralSurface::Wing => self.wing.clone(),
            StructuralSurface::Fuselage => self.fuselage.clone(),
            StructuralSurface::HorizontalTail => self.horizontal_tail.clone(),
            StructuralSurface::VerticalTail => self.vertical_tail.clone(),
        }
    }

    /// All four weights, or the first unavailable surface in `StructuralSurface::ALL` order.
    pub fn all(&self) -> Result<[(StructuralSurface, f64); 4], CgError> {
        let mut out = [(StructuralSurface::Wing, 0.0); 4];
        for (slot, surface) in out.iter_mut().zip(StructuralSurface::ALL) {
            *slot = (surface, self.get(surface)?);
        }
        Ok(out)
    }

    pub fn is_complete(&self) -> bool {
        self.all().is_ok()
    }
}

fn section_mass(surface: &LiftingSurfaceConfig, config: &EstimatorConfig) -> f64 {
    surface.area
        * surface.effective_mac()
        * surface.thickness_ratio
        * config.density
        * config.density_factor
}

fn sweep_cosine(
    surface: StructuralSurface,
    geometry: &LiftingSurfaceConfig,
) -> Result<f64, CgError> {
    let cos = deg_to_rad(geometry.sweep_deg).cos();
    if cos.abs() < MIN_SWEEP_COSINE {
        return Err(CgError::DegenerateGeometry { surface });
    }
    Ok(cos)
}

// Non-physical inputs are not rejected up front; only a result that is not a
// usable mass is.
fn finite_or_degenerate(surface: StructuralSurface, weight: f64) -> Result<f64, CgError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(CgError::DegenerateGeometry { surface })
    }
}
