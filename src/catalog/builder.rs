//! Builder for experiment definitions.

use super::error::BuildError;
use super::{ExperimentDefinition, ExperimentId};
use crate::core::Reagent;

/// Builder for constructing experiment definitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use biolab::catalog::{DefinitionBuilder, ExperimentId};
/// use biolab::core::Reagent;
///
/// let definition = DefinitionBuilder::new(ExperimentId::Iodine)
///     .name("Iodine Test")
///     .description("Test for starch.")
///     .reagent(Reagent::Iodine)
///     .target_color("#0f172a")
///     .step("Add 2cm³ of food sample to a test tube")
///     .step("Add a few drops of Iodine solution")
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.steps.len(), 2);
/// assert!(!definition.requires_heat);
/// ```
pub struct DefinitionBuilder {
    id: ExperimentId,
    name: Option<String>,
    description: String,
    reagents: Vec<Reagent>,
    requires_heat: bool,
    requires_water_bath: bool,
    target_color: Option<String>,
    steps: Vec<String>,
}

impl DefinitionBuilder {
    pub fn new(id: ExperimentId) -> Self {
        Self {
            id,
            name: None,
            description: String::new(),
            reagents: Vec::new(),
            requires_heat: false,
            requires_water_bath: false,
            target_color: None,
            steps: Vec::new(),
        }
    }

    /// Set the display name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a required test reagent (at least one).
    pub fn reagent(mut self, reagent: Reagent) -> Self {
        self.reagents.push(reagent);
        self
    }

    pub fn requires_heat(mut self, requires: bool) -> Self {
        self.requires_heat = requires;
        self
    }

    /// Recommend a water bath as the heat source. Implies heat.
    pub fn water_bath(mut self) -> Self {
        self.requires_heat = true;
        self.requires_water_bath = true;
        self
    }

    /// Set the colour a positive result shows (required).
    pub fn target_color(mut self, color: impl Into<String>) -> Self {
        self.target_color = Some(color.into());
        self
    }

    /// Append a procedure step (at least one).
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Build the definition.
    pub fn build(self) -> Result<ExperimentDefinition, BuildError> {
        let definition = ExperimentDefinition {
            id: self.id,
            name: self.name.ok_or(BuildError::MissingName)?,
            description: self.description,
            reagents: self.reagents,
            requires_heat: self.requires_heat,
            requires_water_bath: self.requires_water_bath,
            target_color: self.target_color.ok_or(BuildError::MissingTargetColor)?,
            steps: self.steps,
        };
        validate(&definition)?;
        Ok(definition)
    }
}

impl From<ExperimentDefinition> for DefinitionBuilder {
    fn from(definition: ExperimentDefinition) -> Self {
        Self {
            id: definition.id,
            name: Some(definition.name),
            description: definition.description,
            reagents: definition.reagents,
            requires_heat: definition.requires_heat,
            requires_water_bath: definition.requires_water_bath,
            target_color: Some(definition.target_color),
            steps: definition.steps,
        }
    }
}

/// Check a definition that did not come through the builder.
pub(crate) fn validate(definition: &ExperimentDefinition) -> Result<(), BuildError> {
    if definition.name.trim().is_empty() {
        return Err(BuildError::MissingName);
    }
    if definition.target_color.trim().is_empty() {
        return Err(BuildError::MissingTargetColor);
    }
    if definition.reagents.is_empty() {
        return Err(BuildError::NoReagents);
    }
    if definition.steps.is_empty() {
        return Err(BuildError::NoSteps);
    }
    Ok(())
}
