//! The standard reaction rule table.

use super::rule::{Hint, OrderConstraint, Outcome, ReactionRule, RequiredAction, TriggerKind};
use crate::catalog::ExperimentId;
use crate::core::{palette, Color, Reagent};
use std::collections::BTreeMap;
use std::time::Duration;

/// Default length of a multi-stage colour change.
pub const DEFAULT_TRANSITION: Duration = Duration::from_secs(5);

/// Reaction rules keyed by experiment.
///
/// # Example
///
/// ```rust
/// use biolab::catalog::ExperimentId;
/// use biolab::reaction::{RequiredAction, RuleTable};
///
/// let table = RuleTable::standard();
/// let biuret = table.get(ExperimentId::Biuret).unwrap();
/// assert_eq!(biuret.action, RequiredAction::Shake);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    rules: BTreeMap<ExperimentId, ReactionRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for Benedict's, Iodine, Biuret and Ethanol tests.
    pub fn standard() -> Self {
        [benedicts(), iodine(), biuret(), ethanol()]
            .into_iter()
            .fold(Self::new(), Self::with_rule)
    }

    /// Add or replace the rule for its experiment.
    pub fn with_rule(mut self, rule: ReactionRule) -> Self {
        self.rules.insert(rule.experiment, rule);
        self
    }

    /// Stretch or shrink every multi-stage colour change.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        for outcome in self.rules.values_mut().flat_map(|r| r.outcomes.iter_mut()) {
            outcome.color = std::mem::take(&mut outcome.color).with_duration(duration);
        }
        self
    }

    pub fn get(&self, experiment: ExperimentId) -> Option<&ReactionRule> {
        self.rules.get(&experiment)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReactionRule> {
        self.rules.values()
    }
}

fn benedicts() -> ReactionRule {
    ReactionRule {
        experiment: ExperimentId::Benedicts,
        reagents: vec![Reagent::Benedicts],
        action: RequiredAction::Heat,
        order: None,
        pending_hint: Some(Hint::Heat),
        outcomes: vec![
            Outcome::detects(
                Reagent::SampleGlucose,
                "Result: Solution turned brick-red. High concentration of reducing sugar!",
                Color::transition(
                    [
                        palette::BLUE,
                        palette::GREEN,
                        palette::YELLOW,
                        palette::ORANGE,
                        palette::BRICK_RED,
                    ],
                    DEFAULT_TRANSITION,
                ),
            ),
            Outcome::detects(
                Reagent::SampleGlucoseLow,
                "Result: Solution turned yellow/green. Low concentration of reducing sugar.",
                Color::transition(
                    [palette::BLUE, palette::GREEN, palette::YELLOW],
                    DEFAULT_TRANSITION,
                ),
            ),
            // Heating is what proves the absence of sugar; adding to an
            // already heated tube does not.
            Outcome::otherwise(
                "Result: Solution remained blue. No reducing sugar.",
                Color::solid(palette::BLUE),
            )
            .only_on(TriggerKind::Heat),
        ],
    }
}

fn iodine() -> ReactionRule {
    ReactionRule {
        experiment: ExperimentId::Iodine,
        reagents: vec![Reagent::Iodine],
        action: RequiredAction::None,
        order: None,
        pending_hint: None,
        outcomes: vec![
            Outcome::detects(
                Reagent::SampleStarch,
                "Result: Solution turned blue-black. Starch present!",
                Color::solid(palette::BLUE_BLACK),
            ),
            Outcome::otherwise(
                "Result: Solution remained orange-brown. No starch.",
                Color::solid(palette::ORANGE_BROWN),
            ),
        ],
    }
}

fn biuret() -> ReactionRule {
    ReactionRule {
        experiment: ExperimentId::Biuret,
        reagents: vec![Reagent::BiuretA, Reagent::BiuretB],
        action: RequiredAction::Shake,
        order: None,
        pending_hint: Some(Hint::Mix),
        outcomes: vec![
            Outcome::detects(
                Reagent::SampleProtein,
                "Result: Solution turned purple. Protein present!",
                Color::solid(palette::PURPLE),
            ),
            Outcome::otherwise(
                "Result: Solution remained blue. No protein.",
                Color::solid(palette::BLUE),
            ),
        ],
    }
}

fn ethanol() -> ReactionRule {
    ReactionRule {
        experiment: ExperimentId::Ethanol,
        reagents: vec![Reagent::Ethanol, Reagent::Water],
        action: RequiredAction::Shake,
        order: Some(OrderConstraint {
            first: Reagent::Ethanol,
            then: Reagent::Water,
        }),
        pending_hint: None,
        outcomes: vec![
            Outcome::detects(
                Reagent::SampleLipid,
                "Result: White emulsion formed. Lipids present!",
                Color::solid(palette::WHITE),
            ),
            Outcome::otherwise(
                "Result: Solution remained clear. No lipids.",
                Color::solid(palette::TRANSPARENT),
            ),
        ],
    }
}
