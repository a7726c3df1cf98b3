use serde::{Deserialize, Serialize};

use crate::utils::{chord_from_area, span_from_area};

/// Planform and section parameters of a lifting surface (wing or tail).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftingSurfaceConfig {
    /// Planform area (m²).
    pub area: f64,
    /// Aspect ratio, span² / area.
    pub aspect_ratio: f64,
    /// Mean aerodynamic chord (m). Falls back to `area / span` when unset.
    #[serde(default)]
    pub mac: Option<f64>,
    /// Maximum thickness-to-chord ratio.
    #[serde(default = "default_thickness_ratio")]
    pub thickness_ratio: f64,
    /// Quarter-chord sweep angle (degrees).
    #[serde(default)]
    pub sweep_deg: f64,
    /// Tip chord / root chord.
    pub taper_ratio: f64,
}

fn default_thickness_ratio() -> f64 {
    0.12
}

impl LiftingSurfaceConfig {
    /// Creates a straight (unswept) surface with a 12% thick section.
    ///
    /// # Arguments
    /// * `area` - Planform area (m²).
    /// * `aspect_ratio` - Span² / area.
    /// * `taper_ratio` - Tip chord / root chord.
    pub fn new(area: f64, aspect_ratio: f64, taper_ratio: f64) -> Self {
        Self {
            area,
            aspect_ratio,
            mac: None,
            thickness_ratio: default_thickness_ratio(),
            sweep_deg: 0.0,
            taper_ratio,
        }
    }

    pub fn wing() -> Self {
        Self::new(0.5, 6.0, 0.7)
    }

    pub fn horizontal_tail() -> Self {
        Self::new(0.1, 4.0, 0.5)
    }

    pub fn vertical_tail() -> Self {
        Self::new(0.05, 3.0, 0.6)
    }

    pub fn with_mac(mut self, mac: f64) -> Self {
        self.mac = Some(mac);
        self
    }

    pub fn with_sweep(mut self, sweep_deg: f64) -> Self {
        self.sweep_deg = sweep_deg;
        self
    }

    /// Span (or height, for a vertical tail) in metres.
    pub fn span(&self) -> f64 {
        span_from_area(self.area, self.aspect_ratio)
    }

    /// Geometric mean chord, `area / span`.
    pub fn mean_chord(&self) -> f64 {
        chord_from_area(self.area, self.aspect_ratio)
    }

    /// The chord fed to the weight formulas.
    pub fn effective_mac(&self) -> f64 {
        self.mac.unwrap_or_else(|| self.mean_chord())
    }
}
