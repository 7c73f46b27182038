//! Static catalog of experiment definitions.
//!
//! The catalog is configuration handed to the engine at startup. It names
//! the tests, lists their reagents and procedure steps, and is never
//! mutated by the engine.

use crate::core::{palette, Reagent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub mod builder;
pub mod error;

pub use builder::DefinitionBuilder;
pub use error::{BuildError, CatalogError, UnknownExperiment};

/// The supported food tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentId {
    Benedicts,
    Iodine,
    Biuret,
    Ethanol,
}

impl ExperimentId {
    pub const ALL: [ExperimentId; 4] = [
        ExperimentId::Benedicts,
        ExperimentId::Iodine,
        ExperimentId::Biuret,
        ExperimentId::Ethanol,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Benedicts => "benedicts",
            Self::Iodine => "iodine",
            Self::Biuret => "biuret",
            Self::Ethanol => "ethanol",
        }
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperimentId {
    type Err = UnknownExperiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownExperiment(s.to_string()))
    }
}

/// Immutable description of one food test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentDefinition {
    pub id: ExperimentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub reagents: Vec<Reagent>,
    #[serde(default)]
    pub requires_heat: bool,
    #[serde(default)]
    pub requires_water_bath: bool,
    pub target_color: String,
    pub steps: Vec<String>,
}

/// Lookup table of experiment definitions keyed by id.
///
/// # Example
///
/// ```rust
/// use biolab::catalog::{Catalog, ExperimentId};
///
/// let catalog = Catalog::standard();
/// let benedicts = catalog.get(ExperimentId::Benedicts).unwrap();
/// assert_eq!(benedicts.name, "Benedict's Test");
/// assert!(benedicts.requires_water_bath);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    definitions: BTreeMap<ExperimentId, ExperimentDefinition>,
}

impl Catalog {
    /// The four standard food tests.
    pub fn standard() -> Self {
        let definitions = [benedicts(), iodine(), biuret(), ethanol()]
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        Self { definitions }
    }

    /// Build a catalog from definitions, validating each and rejecting
    /// duplicate ids.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ExperimentDefinition>,
    {
        let mut map = BTreeMap::new();
        for definition in definitions {
            builder::validate(&definition).map_err(|source| CatalogError::Invalid {
                id: definition.id,
                source,
            })?;
            let id = definition.id;
            if map.insert(id, definition).is_some() {
                return Err(CatalogError::Duplicate(id));
            }
        }
        Ok(Self { definitions: map })
    }

    /// Parse a JSON array of definitions.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<ExperimentDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Read a JSON catalog from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, id: ExperimentId) -> Option<&ExperimentDefinition> {
        self.definitions.get(&id)
    }

    /// Display name for an experiment, falling back to its id.
    pub fn display_name(&self, id: ExperimentId) -> &str {
        self.get(id).map(|d| d.name.as_str()).unwrap_or(id.as_str())
    }

    /// Definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ExperimentDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn steps(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

fn benedicts() -> ExperimentDefinition {
    ExperimentDefinition {
        id: ExperimentId::Benedicts,
        name: "Benedict's Test".to_string(),
        description: "Test for reducing sugars (e.g., glucose). Requires heat.".to_string(),
        reagents: vec![Reagent::Benedicts],
        requires_heat: true,
        requires_water_bath: true,
        target_color: palette::BRICK_RED.to_string(),
        steps: steps(&[
            "Add 2cm³ of food sample to a test tube",
            "Add 2cm³ of Benedict's solution",
            "Heat in a boiling water bath for 5 minutes",
            "Observe color change (Blue → Green → Yellow → Orange → Brick Red)",
        ]),
    }
}

fn iodine() -> ExperimentDefinition {
    ExperimentDefinition {
        id: ExperimentId::Iodine,
        name: "Iodine Test".to_string(),
        description: "Test for starch.".to_string(),
        reagents: vec![Reagent::Iodine],
        requires_heat: false,
        requires_water_bath: false,
        target_color: palette::BLUE_BLACK.to_string(),
        steps: steps(&[
            "Add 2cm³ of food sample to a test tube",
            "Add a few drops of Iodine solution",
            "Observe color change (Orange-brown → Blue-black)",
        ]),
    }
}

fn biuret() -> ExperimentDefinition {
    ExperimentDefinition {
        id: ExperimentId::Biuret,
        name: "Biuret Test".to_string(),
        description: "Test for proteins.".to_string(),
        reagents: vec![Reagent::BiuretA, Reagent::BiuretB],
        requires_heat: false,
        requires_water_bath: false,
        target_color: palette::PURPLE.to_string(),
        steps: steps(&[
            "Add 2cm³ of food sample to a test tube",
            "Add 2cm³ of Biuret A (NaOH) and Biuret B (CuSO4)",
            "Shake gently",
            "Observe color change (Blue → Purple/Lilac)",
        ]),
    }
}

fn ethanol() -> ExperimentDefinition {
    ExperimentDefinition {
        id: ExperimentId::Ethanol,
        name: "Ethanol Emulsion Test".to_string(),
        description: "Test for fats/lipids.".to_string(),
        reagents: vec![Reagent::Ethanol, Reagent::Water],
        requires_heat: false,
        requires_water_bath: false,
        target_color: palette::WHITE.to_string(),
        steps: steps(&[
            "Add 2cm³ of food sample to a test tube",
            "Add 2cm³ of Ethanol",
            "Shake vigorously to dissolve lipid",
            "Add 2cm³ of distilled water",
            "Observe formation of white emulsion",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_every_test() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 4);
        for id in ExperimentId::ALL {
            let definition = catalog.get(id).unwrap();
            assert_eq!(definition.id, id);
            assert!(builder::validate(definition).is_ok());
        }
    }

    #[test]
    fn only_benedicts_requires_heat() {
        let heated: Vec<_> = Catalog::standard()
            .iter()
            .filter(|d| d.requires_heat)
            .map(|d| d.id)
            .collect();
        assert_eq!(heated, vec![ExperimentId::Benedicts]);
    }

    #[test]
    fn experiment_ids_parse() {
        assert_eq!("biuret".parse::<ExperimentId>(), Ok(ExperimentId::Biuret));
        assert_eq!(
            "vitamin_c".parse::<ExperimentId>(),
            Err(UnknownExperiment("vitamin_c".to_string()))
        );
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.display_name(ExperimentId::Iodine), "iodine");
        assert_eq!(
            Catalog::standard().display_name(ExperimentId::Iodine),
            "Iodine Test"
        );
    }

    #[test]
    fn json_catalog_loads() {
        let json = r##"[
            {
                "id": "iodine",
                "name": "Starch Check",
                "reagents": ["iodine"],
                "target_color": "#0f172a",
                "steps": ["Add iodine"]
            }
        ]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let definition = catalog.get(ExperimentId::Iodine).unwrap();
        assert_eq!(definition.name, "Starch Check");
        assert!(definition.description.is_empty());
        assert!(!definition.requires_heat);
    }

    #[test]
    fn json_catalog_rejects_duplicates() {
        let json = r##"[
            {"id": "iodine", "name": "A", "reagents": ["iodine"], "target_color": "#000", "steps": ["x"]},
            {"id": "iodine", "name": "B", "reagents": ["iodine"], "target_color": "#000", "steps": ["y"]}
        ]"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(ExperimentId::Iodine)));
    }

    #[test]
    fn json_catalog_rejects_empty_steps() {
        let json = r##"[
            {"id": "biuret", "name": "B", "reagents": ["biuretA"], "target_color": "#000", "steps": []}
        ]"##;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Invalid {
                id: ExperimentId::Biuret,
                source: BuildError::NoSteps
            }
        ));
    }

    #[test]
    fn json_catalog_rejects_unknown_reagent() {
        let json = r##"[
            {"id": "biuret", "name": "B", "reagents": ["mercury"], "target_color": "#000", "steps": ["x"]}
        ]"##;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load_from_file("/nonexistent/biolab/catalog.json").unwrap_err();
        match err {
            CatalogError::Io { path, .. } => {
                assert!(path.ends_with("catalog.json"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
