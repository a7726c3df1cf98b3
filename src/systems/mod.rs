pub mod aggregator;
pub mod structure;

pub use aggregator::{compute_cg, CgAggregator, CgResult, ComponentEdit};
pub use structure::{StructuralWeightEstimator, StructuralWeights};
