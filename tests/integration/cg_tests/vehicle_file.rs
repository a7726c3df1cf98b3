use approx::assert_relative_eq;
use nalgebra::Vector3;
use std::io::Write;
use tempfile::NamedTempFile;
use uav_cg::{CgAggregator, CgError, ConfigError, Material, VehicleConfig, VehicleSource};

fn write_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_vehicle_file() {
    let file = write_yaml(
        r#"
name: Mapper
material: Aluminum
estimator:
  wing:
    area: 0.6
    aspect_ratio: 8.0
    taper_ratio: 0.5
    sweep_deg: 5.0
  ultimate_load_factor: 4.4
structural_positions:
  wing: { x: 0.45, y: 0.0, z: 0.05 }
payload:
  - name: Battery
    weight_grams: 559
    position: { x: 0.3, y: 0.0, z: 0.0 }
  - name: Camera
    weight_grams: 125
    position: { x: 0.1, y: 0.0, z: -0.05 }
"#,
    );

    let config = VehicleConfig::new(VehicleSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(config.name, "Mapper");
    assert_eq!(config.material, Material::Aluminum);
    assert_relative_eq!(config.estimator.wing.area, 0.6);
    assert_relative_eq!(config.estimator.ultimate_load_factor, 4.4);
    // Omitted blocks keep their defaults
    assert_relative_eq!(config.estimator.horizontal_tail.area, 0.1);
    assert_relative_eq!(config.structural_positions.vertical_tail.z, 0.2);

    let aggregator = CgAggregator::from_config(&config).unwrap();
    assert_eq!(aggregator.len(), 6);
    assert_eq!(
        aggregator.get("Wing").unwrap().position(),
        Vector3::new(0.45, 0.0, 0.05)
    );
    assert!(aggregator.compute_cg().is_ok());
}

#[test]
fn test_duplicate_payload_in_file() {
    let config = VehicleConfig::from_yaml(
        r#"
name: Doubled
payload:
  - name: Battery
    weight_grams: 300
  - name: Battery
    weight_grams: 300
"#,
    )
    .unwrap();

    assert_eq!(
        CgAggregator::from_config(&config),
        Err(CgError::DuplicateName("Battery".to_string()))
    );
}

#[test]
fn test_payload_cannot_shadow_structure() {
    let config = VehicleConfig::from_yaml(
        "name: Odd\npayload:\n  - name: Wing\n    weight_grams: 10\n",
    )
    .unwrap();

    assert_eq!(
        CgAggregator::from_config(&config),
        Err(CgError::DuplicateName("Wing".to_string()))
    );
}

#[test]
fn test_missing_file() {
    let result = VehicleConfig::new(VehicleSource::File("does/not/exist.yaml".into()));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_malformed_yaml() {
    let file = write_yaml("name: [unterminated\n");
    let result = VehicleConfig::from_file(file.path());
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}
