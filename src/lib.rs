//! Weight and center of gravity estimation for small fixed-wing UAVs.
//!
//! [`StructuralWeightEstimator`] turns airframe geometry and material into
//! masses for the wing, fuselage and tails. [`CgAggregator`] owns the
//! component list, writes those masses into the structural records and
//! reduces the whole list to a total weight and an (x, y, z) CG.

pub mod components;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    Component, ComponentKind, ConfigError, EstimatorConfig, Material, StructuralSurface,
    VehicleConfig, VehicleSource,
};
pub use resources::MassReport;
pub use systems::{
    compute_cg, CgAggregator, CgResult, ComponentEdit, StructuralWeightEstimator,
    StructuralWeights,
};
pub use utils::CgError;
