//! Actions a student can take at the bench.

use crate::catalog::ExperimentId;
use crate::core::Reagent;
use serde::{Deserialize, Serialize};

/// Heat source applied to the tube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatMethod {
    Burner,
    Bath,
}

impl HeatMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Burner => "Bunsen Burner",
            Self::Bath => "Water Bath",
        }
    }
}

/// Every operation the engine accepts, as data.
///
/// # Example
///
/// ```rust
/// use biolab::engine::{HeatMethod, LabAction};
///
/// let action: LabAction = serde_json::from_str(r#"{"heat":"bath"}"#).unwrap();
/// assert_eq!(action, LabAction::Heat(HeatMethod::Bath));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabAction {
    Select(ExperimentId),
    ToggleGoggles,
    AddReagent(Reagent),
    Heat(HeatMethod),
    Shake,
    Reset,
}

impl LabAction {
    /// Whether the action is refused while a run is failed.
    pub fn is_blocked_by_failure(&self) -> bool {
        matches!(self, Self::AddReagent(_) | Self::Heat(_) | Self::Shake)
    }
}
