pub mod component;
pub mod config;

pub use component::{Component, ComponentKind, StructuralSurface};
pub use config::{
    ConfigError, DerivedGeometry, EstimatorConfig, FuselageConfig, LiftingSurfaceConfig,
    Material, PayloadSpec, RawVehicleConfig, StructuralPositions, VehicleConfig, VehicleSource,
    VehicleType, VerticalTailConfig,
};
