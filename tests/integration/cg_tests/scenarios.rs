use approx::assert_relative_eq;
use nalgebra::Vector3;
use uav_cg::components::LiftingSurfaceConfig;
use uav_cg::{
    CgAggregator, CgError, Component, Material, StructuralSurface, StructuralWeightEstimator,
    VehicleConfig,
};

use crate::common::{assert_position_eq, battery_and_camera, reference_estimator_config};

#[test]
fn test_battery_and_camera() {
    let (total, x, y, z) = battery_and_camera().compute_cg().unwrap().as_tuple();

    assert_relative_eq!(total, 0.684, epsilon = 1e-12);
    assert_relative_eq!(x, (0.559 * 0.7 + 0.125 * 0.2) / 0.684, epsilon = 1e-12);
    assert_relative_eq!(y, 0.0);
    assert_relative_eq!(z, (0.559 * 0.5 + 0.125 * 0.1) / 0.684, epsilon = 1e-12);
}

#[test]
fn test_reference_wing_through_aggregator() {
    let config = reference_estimator_config();
    let mut aggregator = CgAggregator::with_components(vec![Component::structural(
        StructuralSurface::Wing,
        0.0,
        Vector3::new(0.5, 0.0, 0.0),
    )
    .unwrap()])
    .unwrap();

    let result = aggregator.on_parameter_change(&config).unwrap();

    let expected_kg = 0.5 * 0.5 * 0.12 * 2700.0 * 1.0 * (6.0_f64 * 3.8).powf(0.6) * 1.0 * 9.81;
    assert_relative_eq!(result.total_weight_kg, expected_kg, max_relative = 1e-12);
    assert_position_eq(&result.cg, &Vector3::new(0.5, 0.0, 0.0), 1e-12);
}

#[test]
fn test_default_vehicle_cg() {
    let config = VehicleConfig::default();
    let aggregator = CgAggregator::from_config(&config).unwrap();
    let result = aggregator.compute_cg().unwrap();

    let weights = StructuralWeightEstimator::estimate(&config.estimator);
    let structural_kg: f64 = weights.all().unwrap().iter().map(|(_, kg)| kg).sum();
    assert_relative_eq!(
        result.total_weight_kg,
        structural_kg + 0.86,
        max_relative = 1e-12
    );

    // Everything sits on the centreline, and nothing is below the datum
    assert_relative_eq!(result.y(), 0.0);
    assert!(result.z() >= 0.0);
    assert!(result.x() >= 0.5 && result.x() <= 0.95);
}

#[test]
fn test_heavier_material_pulls_cg_aft() {
    // Payload sits forward of the tails, so a denser airframe moves the CG towards them
    let mut aggregator = CgAggregator::from_config(&VehicleConfig::default().with_material(Material::Foam)).unwrap();
    for name in ["Camera", "LiDAR Sensor", "GPS Module", "Communication Module", "Battery"] {
        aggregator.update_position(name, Vector3::new(0.1, 0.0, 0.0)).unwrap();
    }
    let foam = aggregator.compute_cg().unwrap();

    let config = VehicleConfig::default().with_material(Material::Aluminum);
    let aluminum = aggregator.on_parameter_change(&config.estimator).unwrap();

    assert!(aluminum.total_weight_kg > foam.total_weight_kg);
    assert!(aluminum.x() > foam.x());
}

#[test]
fn test_degenerate_surface_reports_which_one() {
    let mut config = reference_estimator_config();
    config.wing = LiftingSurfaceConfig::wing().with_sweep(90.0);

    let mut aggregator = CgAggregator::with_defaults().unwrap();
    let before = aggregator.clone();
    let err = aggregator.on_parameter_change(&config).unwrap_err();

    assert_eq!(
        err,
        CgError::DegenerateGeometry {
            surface: StructuralSurface::Wing
        }
    );
    assert_eq!(err.to_string(), "Degenerate geometry for Wing: weight unavailable");
    assert_eq!(aggregator, before);
}

#[test]
fn test_error_messages_are_displayable() {
    assert_eq!(
        CgError::DivisionByZero.to_string(),
        "CG undefined: total weight is zero"
    );
    assert_eq!(
        CgError::NotFound("Radar".to_string()).to_string(),
        "Component not found: Radar"
    );
    assert_eq!(
        CgError::DuplicateName("Camera".to_string()).to_string(),
        "Duplicate component name: Camera"
    );
}
