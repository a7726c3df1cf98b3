mod components;
mod estimator;

// Re-export test fixtures
pub use components::*;
pub use estimator::*;
