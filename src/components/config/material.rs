use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::{ALUMINUM_DENSITY, CARBON_FIBER_DENSITY, FOAM_DENSITY, PLASTIC_DENSITY};

/// Structural material of the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    CarbonFiber,
    Aluminum,
    Foam,
    Plastic,
    /// Any other material, given by density (kg/m³).
    Custom(f64),
}

impl Material {
    pub const PRESETS: [Material; 4] = [
        Material::CarbonFiber,
        Material::Aluminum,
        Material::Foam,
        Material::Plastic,
    ];

    /// Density in kg/m³.
    pub fn density(&self) -> f64 {
        match self {
            Material::CarbonFiber => CARBON_FIBER_DENSITY,
            Material::Aluminum => ALUMINUM_DENSITY,
            Material::Foam => FOAM_DENSITY,
            Material::Plastic => PLASTIC_DENSITY,
            Material::Custom(density) => *density,
        }
    }

    /// The preset with exactly this density, otherwise `Custom`.
    pub fn from_density(density: f64) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.density() == density)
            .unwrap_or(Material::Custom(density))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::CarbonFiber => write!(f, "Carbon Fiber"),
            Material::Aluminum => write!(f, "Aluminum"),
            Material::Foam => write!(f, "Foam"),
            Material::Plastic => write!(f, "Plastic"),
            Material::Custom(density) => write!(f, "Custom ({} kg/m^3)", density),
        }
    }
}

impl FromStr for Material {
    type Err = String;

    /// Accepts a preset name (case and separator insensitive) or a bare density.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "carbonfiber" | "carbon" => Ok(Material::CarbonFiber),
            "aluminum" | "aluminium" => Ok(Material::Aluminum),
            "foam" => Ok(Material::Foam),
            "plastic" => Ok(Material::Plastic),
            _ => match s.trim().parse::<f64>() {
                Ok(density) if density.is_finite() && density > 0.0 => {
                    Ok(Material::Custom(density))
                }
                _ => Err(format!("Unknown material: {}", s)),
            },
        }
    }
}
