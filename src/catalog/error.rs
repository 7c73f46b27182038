//! Catalog errors.

use super::ExperimentId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building an experiment definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Display name not specified. Call .name(text) before .build()")]
    MissingName,

    #[error("No procedure steps defined. Add at least one step")]
    NoSteps,

    #[error("No test reagents defined. Add at least one reagent")]
    NoReagents,

    #[error("Target colour not specified. Call .target_color(value)")]
    MissingTargetColor,
}

/// Error returned when parsing an unknown experiment identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown experiment '{0}'")]
pub struct UnknownExperiment(pub String);

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON for a list of definitions
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A definition failed validation
    #[error("Invalid definition for '{id}': {source}")]
    Invalid {
        id: ExperimentId,
        #[source]
        source: BuildError,
    },

    /// The same experiment appears twice
    #[error("Experiment '{0}' is defined more than once")]
    Duplicate(ExperimentId),
}
