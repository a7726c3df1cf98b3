use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::components::{Component, EstimatorConfig, StructuralSurface, VehicleConfig};
use crate::resources::MassReport;
use crate::systems::structure::StructuralWeightEstimator;
use crate::utils::{CgError, GRAMS_PER_KG};

/// Total mass and center of gravity of a component list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgResult {
    pub total_weight_kg: f64,
    /// CG relative to the vehicle datum (m).
    pub cg: Vector3<f64>,
}

impl CgResult {
    pub fn x(&self) -> f64 {
        self.cg.x
    }

    pub fn y(&self) -> f64 {
        self.cg.y
    }

    pub fn z(&self) -> f64 {
        self.cg.z
    }

    /// `(total_weight_kg, x, y, z)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.total_weight_kg, self.cg.x, self.cg.y, self.cg.z)
    }
}

/// Weighted centroid of the components.
///
/// Each position is scaled by its share of the total weight, so a single
/// component reproduces its own position bit for bit.
///
/// # Errors
/// `CgError::DivisionByZero` when the list is empty or every weight is zero.
pub fn compute_cg(components: &[Component]) -> Result<CgResult, CgError> {
    let total_weight_kg: f64 = components.iter().map(Component::weight_kg).sum();
    if total_weight_kg <= 0.0 {
        return Err(CgError::DivisionByZero);
    }

    let cg = components
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f64>, component| {
            acc + component.position() * (component.weight_kg() / total_weight_kg)
        });

    Ok(CgResult {
        total_weight_kg,
        cg,
    })
}

/// An edit request coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentEdit {
    Add {
        name: String,
        weight_grams: f64,
        position: Vector3<f64>,
    },
    Remove {
        name: String,
    },
    Rename {
        name: String,
        new_name: String,
    },
    Reposition {
        name: String,
        position: Vector3<f64>,
    },
    Reweight {
        name: String,
        weight_grams: f64,
    },
}

/// Owner of the vehicle's component list.
///
/// All mutation goes through the methods below; a failed operation leaves the
/// list exactly as it was. Mutating methods take `&mut self`, so sharing an
/// aggregator across threads needs a lock around it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CgAggregator {
    components: Vec<Component>,
}

impl CgAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an aggregator over an existing list, rejecting duplicate names.
    pub fn with_components(components: Vec<Component>) -> Result<Self, CgError> {
        let mut aggregator = Self::new();
        for component in components {
            if aggregator.get(component.name()).is_some() {
                return Err(CgError::DuplicateName(component.name().to_string()));
            }
            aggregator.components.push(component);
        }
        Ok(aggregator)
    }

    /// Structural placeholders first, then the payload, with structural
    /// weights already estimated.
    pub fn from_config(config: &VehicleConfig) -> Result<Self, CgError> {
        let mut aggregator = Self::new();

        for surface in StructuralSurface::ALL {
            let position = config.structural_positions.get(surface).into();
            aggregator
                .components
                .push(Component::structural(surface, 0.0, position)?);
        }

        for payload in &config.payload {
            aggregator.add_component(
                payload.name.clone(),
                payload.weight_grams,
                payload.position.into(),
            )?;
        }

        aggregator.recompute_structural(&config.estimator)?;
        info!(
            "Built component list for {} ({} components)",
            config.name,
            aggregator.len()
        );
        Ok(aggregator)
    }

    pub fn with_defaults() -> Result<Self, CgError> {
        Self::from_config(&VehicleConfig::default())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Overwrites the weight of every structural record present with the
    /// estimator output. Missing records are skipped, and so are their
    /// surfaces' estimates.
    ///
    /// Nothing is written unless every present record gets a usable weight.
    ///
    /// # Returns
    /// The number of records updated.
    pub fn recompute_structural(&mut self, config: &EstimatorConfig) -> Result<usize, CgError> {
        let weights = StructuralWeightEstimator::estimate(config);

        let mut pending = Vec::with_capacity(StructuralSurface::ALL.len());
        for surface in StructuralSurface::ALL {
            let Some(index) = self.structural_index(surface) else {
                debug!("No {} record, skipping", surface);
                continue;
            };
            let weight_grams = weights.get(surface)? * GRAMS_PER_KG;
            if !weight_grams.is_finite() {
                return Err(CgError::DegenerateGeometry { surface });
            }
            pending.push((index, weight_grams));
        }

        for &(index, weight_grams) in &pending {
            self.components[index].set_weight_grams(weight_grams)?;
        }

        debug!("Recomputed {} structural weights", pending.len());
        Ok(pending.len())
    }

    /// Appends a payload component.
    ///
    /// # Errors
    /// `DuplicateName` if the name is taken, `InvalidComponent` if the record
    /// fails validation.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        weight_grams: f64,
        position: Vector3<f64>,
    ) -> Result<(), CgError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CgError::DuplicateName(name));
        }

        let component = Component::payload(name, weight_grams, position)?;
        debug!("Adding component {}", component.name());
        self.components.push(component);
        Ok(())
    }

    /// Removes the payload component with this name and returns it.
    pub fn remove_component(&mut self, name: &str) -> Result<Component, CgError> {
        let index = self.index_of(name)?;
        if self.components[index].kind().is_structural() {
            return Err(structural_error(name, "remove"));
        }

        debug!("Removing component {}", name);
        Ok(self.components.remove(index))
    }

    pub fn rename_component(&mut self, name: &str, new_name: &str) -> Result<(), CgError> {
        let index = self.index_of(name)?;
        if self.components[index].kind().is_structural() {
            return Err(structural_error(name, "rename"));
        }
        if name == new_name {
            return Ok(());
        }
        if new_name.trim().is_empty() {
            return Err(CgError::InvalidComponent(
                "component name must not be empty".to_string(),
            ));
        }
        if self.get(new_name).is_some() {
            return Err(CgError::DuplicateName(new_name.to_string()));
        }

        debug!("Renaming component {} to {}", name, new_name);
        self.components[index].set_name(new_name.to_string());
        Ok(())
    }

    pub fn update_position(&mut self, name: &str, position: Vector3<f64>) -> Result<(), CgError> {
        let index = self.index_of(name)?;
        self.components[index].set_position(position)
    }

    /// Sets a payload weight. Structural weights only change through
    /// [`CgAggregator::recompute_structural`].
    pub fn update_weight(&mut self, name: &str, weight_grams: f64) -> Result<(), CgError> {
        let index = self.index_of(name)?;
        if self.components[index].kind().is_structural() {
            return Err(structural_error(name, "reweight"));
        }
        self.components[index].set_weight_grams(weight_grams)
    }

    pub fn compute_cg(&self) -> Result<CgResult, CgError> {
        compute_cg(&self.components)
    }

    /// Entry point for estimator parameter changes: re-estimate, then recompute the CG.
    pub fn on_parameter_change(&mut self, config: &EstimatorConfig) -> Result<CgResult, CgError> {
        self.recompute_structural(config)?;
        let result = self.compute_cg()?;
        info!(
            "Total weight {:.3} kg, CG ({:.4}, {:.4}, {:.4})",
            result.total_weight_kg, result.cg.x, result.cg.y, result.cg.z
        );
        Ok(result)
    }

    /// Entry point for component edits: apply the edit, then recompute the CG.
    ///
    /// A rejected edit leaves the list unchanged. An accepted edit stays
    /// applied even if the CG is then undefined.
    pub fn on_edit(&mut self, edit: ComponentEdit) -> Result<CgResult, CgError> {
        self.apply_edit(edit)?;
        self.compute_cg()
    }

    pub fn apply_edit(&mut self, edit: ComponentEdit) -> Result<(), CgError> {
        match edit {
            ComponentEdit::Add {
                name,
                weight_grams,
                position,
            } => self.add_component(name, weight_grams, position),
            ComponentEdit::Remove { name } => self.remove_component(&name).map(|_| ()),
            ComponentEdit::Rename { name, new_name } => self.rename_component(&name, &new_name),
            ComponentEdit::Reposition { name, position } => self.update_position(&name, position),
            ComponentEdit::Reweight { name, weight_grams } => {
                self.update_weight(&name, weight_grams)
            }
        }
    }

    /// Outbound snapshot for the presentation layer.
    pub fn report(&self, vehicle: impl Into<String>) -> Result<MassReport, CgError> {
        MassReport::from_aggregator(vehicle, self)
    }

    fn index_of(&self, name: &str) -> Result<usize, CgError> {
        self.components
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| CgError::NotFound(name.to_string()))
    }

    fn structural_index(&self, surface: StructuralSurface) -> Option<usize> {
        self.components
            .iter()
            .position(|c| c.name() == surface.component_name() && c.kind().is_structural())
    }
}

fn structural_error(name: &str, operation: &str) -> CgError {
    CgError::StructuralComponent {
        name: name.to_string(),
        operation: operation.to_string(),
    }
}
