mod estimator;
mod fuselage;
mod loader;
mod material;
mod surface;
mod vehicle;

pub use estimator::{DerivedGeometry, EstimatorConfig, VerticalTailConfig};
pub use fuselage::FuselageConfig;
pub use loader::{ConfigError, PayloadSpec, RawVehicleConfig};
pub use material::Material;
pub use surface::LiftingSurfaceConfig;
pub use vehicle::{StructuralPositions, VehicleConfig, VehicleSource, VehicleType};
