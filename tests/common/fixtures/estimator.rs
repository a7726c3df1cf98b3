use uav_cg::components::{
    EstimatorConfig, FuselageConfig, LiftingSurfaceConfig, VerticalTailConfig,
};

/// Aluminium airframe with identical straight, untapered surfaces
/// (S = 0.5 m², MAC = 0.5 m, t/c = 0.12, AR = 6).
pub fn reference_estimator_config() -> EstimatorConfig {
    let surface = LiftingSurfaceConfig::new(0.5, 6.0, 1.0).with_mac(0.5);
    EstimatorConfig {
        wing: surface.clone(),
        fuselage: FuselageConfig::new(1.0, 0.2),
        horizontal_tail: surface.clone(),
        vertical_tail: VerticalTailConfig {
            surface,
            volume_coefficient: 0.04,
            thickness_correction: 1.0,
        },
        density: 2700.0,
        density_factor: 1.0,
        ultimate_load_factor: 3.8,
    }
}
