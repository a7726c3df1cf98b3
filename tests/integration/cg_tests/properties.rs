use approx::assert_relative_eq;
use nalgebra::Vector3;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uav_cg::{compute_cg, CgAggregator, CgError, Component, EstimatorConfig, Material};

use crate::common::{assert_cg_eq, assert_cg_within_bounds, random_components};

#[test]
fn test_cg_is_permutation_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..20 {
        let count = rng.gen_range(2..40);
        let mut components = random_components(&mut rng, count);
        let reference = compute_cg(&components).unwrap();

        components.shuffle(&mut rng);
        let shuffled = compute_cg(&components).unwrap();
        assert_cg_eq(&shuffled, &reference, 1e-9);

        components.reverse();
        let reversed = compute_cg(&components).unwrap();
        assert_cg_eq(&reversed, &reference, 1e-9);
    }
}

#[test]
fn test_cg_never_extrapolates() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let count = rng.gen_range(1..30);
        let components = random_components(&mut rng, count);
        let result = compute_cg(&components).unwrap();
        assert_cg_within_bounds(&components, &result);
    }
}

#[test]
fn test_zero_weight_components_do_not_move_cg() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut components = random_components(&mut rng, 10);
    let reference = compute_cg(&components).unwrap();

    components.push(Component::payload("Label", 0.0, Vector3::new(50.0, -50.0, 50.0)).unwrap());
    let with_massless = compute_cg(&components).unwrap();
    assert_cg_eq(&with_massless, &reference, 1e-12);
}

#[test]
fn test_single_component_identity() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..25 {
        let weight = rng.gen_range(0.1..5000.0);
        let position = Vector3::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        let component = Component::payload("Only", weight, position).unwrap();
        let expected_kg = component.weight_kg();

        let result = compute_cg(&[component]).unwrap();
        assert_eq!(result.total_weight_kg, expected_kg);
        assert_eq!(result.cg, position);
    }
}

#[test]
fn test_all_zero_weights_fail() {
    let components: Vec<Component> = (0..5)
        .map(|i| Component::payload(format!("Empty {}", i), 0.0, Vector3::new(i as f64, 0.0, 0.0)).unwrap())
        .collect();

    let result = compute_cg(&components);
    assert_eq!(result, Err(CgError::DivisionByZero));
}

#[test]
fn test_recompute_is_idempotent() {
    for material in Material::PRESETS {
        let config = EstimatorConfig::default().with_material(material);
        let mut aggregator = CgAggregator::with_defaults().unwrap();

        aggregator.recompute_structural(&config).unwrap();
        let first = aggregator.clone();
        aggregator.recompute_structural(&config).unwrap();

        assert_eq!(aggregator, first);
    }
}

#[test]
fn test_total_weight_is_sum_of_parts() {
    let aggregator = CgAggregator::with_defaults().unwrap();
    let grams: f64 = aggregator.components().iter().map(|c| c.weight_grams()).sum();
    let result = aggregator.compute_cg().unwrap();
    assert_relative_eq!(result.total_weight_kg, grams / 1000.0, max_relative = 1e-12);
}
