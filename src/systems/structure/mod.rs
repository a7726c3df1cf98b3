mod estimator;

pub use estimator::{StructuralWeightEstimator, StructuralWeights};
