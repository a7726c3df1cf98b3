use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use uav_cg::{CgAggregator, Component};

/// The two-item list used throughout: a 559 g battery and a 125 g camera
pub fn battery_and_camera() -> CgAggregator {
    let mut aggregator = CgAggregator::new();
    aggregator
        .add_component("Battery", 559.0, Vector3::new(0.7, 0.0, 0.5))
        .unwrap();
    aggregator
        .add_component("Camera", 125.0, Vector3::new(0.2, 0.0, 0.1))
        .unwrap();
    aggregator
}

/// `count` payload components with random weights in (1, 1000) g and
/// positions in a 2 m box around the datum
pub fn random_components(rng: &mut ChaCha8Rng, count: usize) -> Vec<Component> {
    (0..count)
        .map(|i| {
            let position = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            Component::payload(format!("Item {}", i), rng.gen_range(1.0..1000.0), position)
                .unwrap()
        })
        .collect()
}
