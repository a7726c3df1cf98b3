use thiserror::Error;

use crate::components::StructuralSurface;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CgError {
    #[error("CG undefined: total weight is zero")]
    DivisionByZero,

    #[error("Degenerate geometry for {surface}: weight unavailable")]
    DegenerateGeometry { surface: StructuralSurface },

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error("Duplicate component name: {0}")]
    DuplicateName(String),

    #[error("Invalid component: {0}")]
    InvalidComponent(String),

    #[error("Cannot {operation} structural component: {name}")]
    StructuralComponent { name: String, operation: String },
}
