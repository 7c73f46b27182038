//! Experiment state.
//!
//! `LabState` is a plain value owned by the caller. The engine takes it by
//! value and hands back the next state; nothing is hidden in globals.

use super::color::Color;
use super::history::StatusHistory;
use super::notebook::Notebook;
use super::reagent::Reagent;
use crate::catalog::ExperimentId;
use crate::reaction::Hint;
use crate::safety::SafetyViolation;
use serde::{Deserialize, Serialize};

/// Ambient bench temperature in degrees Celsius.
pub const AMBIENT_TEMPERATURE: f64 = 20.0;

/// Outcome status of the current run.
///
/// `Failed` is terminal until the lab is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    #[default]
    Idle,
    Success,
    Failed,
}

impl LabStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Whether the run is frozen until a reset.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Which one-time hints have already been written to the notebook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintFlags {
    pub mix: bool,
    pub heat: bool,
    pub wrong_order: bool,
}

impl HintFlags {
    pub fn is_shown(&self, hint: Hint) -> bool {
        *self.slot(hint)
    }

    /// Mark a hint as shown. Returns `true` the first time only.
    pub fn mark(&mut self, hint: Hint) -> bool {
        let slot = match hint {
            Hint::Mix => &mut self.mix,
            Hint::Heat => &mut self.heat,
            Hint::WrongOrder => &mut self.wrong_order,
        };
        !std::mem::replace(slot, true)
    }

    fn slot(&self, hint: Hint) -> &bool {
        match hint {
            Hint::Mix => &self.mix,
            Hint::Heat => &self.heat,
            Hint::WrongOrder => &self.wrong_order,
        }
    }
}

/// Everything the bench shows at a point in time.
///
/// The presentation layer only reads this value; the engine produces a new
/// one for every action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabState {
    pub selected_test: Option<ExperimentId>,
    pub tube_contents: Vec<Reagent>,
    pub tube_color: Color,
    pub is_heated: bool,
    pub is_shaken: bool,
    pub has_goggles: bool,
    pub temperature: f64,
    pub status: LabStatus,
    pub failure: Option<SafetyViolation>,
    pub messages: Notebook,
    pub hints: HintFlags,
    pub history: StatusHistory,
}

impl Default for LabState {
    fn default() -> Self {
        Self::new(AMBIENT_TEMPERATURE)
    }
}

impl LabState {
    /// Fresh bench: idle, empty tube, goggles off.
    pub fn new(ambient_temperature: f64) -> Self {
        Self {
            selected_test: None,
            tube_contents: Vec::new(),
            tube_color: Color::default(),
            is_heated: false,
            is_shaken: false,
            has_goggles: false,
            temperature: ambient_temperature,
            status: LabStatus::Idle,
            failure: None,
            messages: Notebook::new(),
            hints: HintFlags::default(),
            history: StatusHistory::new(),
        }
    }

    /// Human-readable reason for a failed run.
    pub fn failure_reason(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    pub fn is_failed(&self) -> bool {
        self.status.is_final()
    }

    pub fn contains(&self, reagent: Reagent) -> bool {
        self.tube_contents.contains(&reagent)
    }

    pub fn has_sample(&self) -> bool {
        self.tube_contents.iter().any(Reagent::is_sample)
    }

    /// Index of the first occurrence of `reagent` in the tube.
    pub fn position_of(&self, reagent: Reagent) -> Option<usize> {
        self.tube_contents.iter().position(|r| *r == reagent)
    }
}
