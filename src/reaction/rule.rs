//! Data-driven reaction rules.

use crate::catalog::ExperimentId;
use crate::core::{Color, LabState, LogKind, Reagent};
use serde::{Deserialize, Serialize};

/// Event that drives a reaction check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Add(Reagent),
    Heat,
    Shake,
}

impl Trigger {
    pub fn kind(&self) -> TriggerKind {
        match self {
            Self::Add(_) => TriggerKind::Add,
            Self::Heat => TriggerKind::Heat,
            Self::Shake => TriggerKind::Shake,
        }
    }
}

/// Trigger without its payload, used to restrict outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Add,
    Heat,
    Shake,
}

/// Physical action a test needs before it can show a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredAction {
    #[default]
    None,
    Heat,
    Shake,
}

impl RequiredAction {
    pub fn is_satisfied(&self, state: &LabState) -> bool {
        match self {
            Self::None => true,
            Self::Heat => state.is_heated,
            Self::Shake => state.is_shaken,
        }
    }
}

/// One-time notebook nudges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    Mix,
    Heat,
    WrongOrder,
}

impl Hint {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Mix => "Hint: Shake the tube to mix the reagents.",
            Self::Heat => "Hint: Heat the tube in a water bath to start the reaction.",
            Self::WrongOrder => "Observation: Nothing happened. Did you add water before ethanol?",
        }
    }

    pub fn kind(&self) -> LogKind {
        match self {
            Self::WrongOrder => LogKind::Warning,
            Self::Mix | Self::Heat => LogKind::Info,
        }
    }
}

/// `first` must enter the tube before `then`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConstraint {
    pub first: Reagent,
    pub then: Reagent,
}

impl OrderConstraint {
    /// Compares first occurrences. Absent reagents never count as violated.
    pub fn is_violated(&self, state: &LabState) -> bool {
        match (state.position_of(self.first), state.position_of(self.then)) {
            (Some(first), Some(then)) => then < first,
            _ => false,
        }
    }
}

/// A classified result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Sample that selects this outcome; `None` matches anything.
    pub sample: Option<Reagent>,
    pub message: String,
    pub kind: LogKind,
    pub color: Color,
    /// Only conclude on this trigger kind.
    #[serde(default)]
    pub only_on: Option<TriggerKind>,
}

impl Outcome {
    pub fn detects(sample: Reagent, message: &str, color: Color) -> Self {
        Self {
            sample: Some(sample),
            message: message.to_string(),
            kind: LogKind::Success,
            color,
            only_on: None,
        }
    }

    pub fn otherwise(message: &str, color: Color) -> Self {
        Self {
            sample: None,
            message: message.to_string(),
            kind: LogKind::Info,
            color,
            only_on: None,
        }
    }

    pub fn only_on(mut self, kind: TriggerKind) -> Self {
        self.only_on = Some(kind);
        self
    }

    pub fn matches(&self, state: &LabState) -> bool {
        self.sample.is_none_or(|s| state.contains(s))
    }

    pub fn is_positive(&self) -> bool {
        self.sample.is_some()
    }
}

/// How one experiment reacts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReactionRule {
    pub experiment: ExperimentId,
    /// Test reagents that must be present alongside a sample.
    pub reagents: Vec<Reagent>,
    #[serde(default)]
    pub action: RequiredAction,
    #[serde(default)]
    pub order: Option<OrderConstraint>,
    #[serde(default)]
    pub pending_hint: Option<Hint>,
    /// Checked in order; the first match classifies the sample.
    pub outcomes: Vec<Outcome>,
}

impl ReactionRule {
    /// Sample and every test reagent are in the tube.
    pub fn reagents_present(&self, state: &LabState) -> bool {
        state.has_sample() && self.reagents.iter().all(|r| state.contains(*r))
    }

    pub fn classify(&self, state: &LabState) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.matches(state))
    }
}
