//! The experiment engine.
//!
//! `LabEngine` holds only static configuration: the catalog, the reaction
//! rule table, the safety rules and the bench constants. Every operation
//! takes the current [`LabState`] by value and returns the next one. The
//! reaction check runs as a direct continuation of the mutating action.

mod action;

pub use action::{HeatMethod, LabAction};

use crate::catalog::{Catalog, ExperimentId};
use crate::config::LabConfig;
use crate::core::{HintFlags, LabState, LabStatus, LogKind, Reagent, StatusTransition};
use crate::reaction::{check, mixing, Reaction, RuleTable, Trigger};
use crate::safety::{self, HeatingContext, SafetyRules, SafetyViolation};
use tracing::{debug, warn};

/// Pure state-transition engine for the food-test bench.
///
/// # Example
///
/// ```rust
/// use biolab::core::{LabStatus, Reagent};
/// use biolab::catalog::ExperimentId;
/// use biolab::engine::{HeatMethod, LabEngine};
///
/// let engine = LabEngine::new();
/// let state = engine.initial_state();
/// let state = engine.toggle_goggles(state);
/// let state = engine.select_experiment(state, ExperimentId::Benedicts);
/// let state = engine.add_reagent(state, Reagent::SampleGlucose);
/// let state = engine.add_reagent(state, Reagent::Benedicts);
/// let state = engine.heat_tube(state, HeatMethod::Bath);
///
/// assert_eq!(state.status, LabStatus::Success);
/// assert_eq!(state.tube_color.final_value(), "#ef4444");
/// ```
pub struct LabEngine {
    catalog: Catalog,
    rules: RuleTable,
    safety: SafetyRules,
    config: LabConfig,
}

impl Default for LabEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LabEngine {
    /// Standard catalog, rules and bench constants.
    pub fn new() -> Self {
        Self::with_config(LabConfig::default())
    }

    pub fn with_config(config: LabConfig) -> Self {
        Self {
            catalog: Catalog::standard(),
            rules: RuleTable::standard().with_transition_duration(config.color_transition),
            safety: SafetyRules::standard(),
            config,
        }
    }

    /// Replace the experiment catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the reaction rules.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules.with_transition_duration(self.config.color_transition);
        self
    }

    /// Replace the heating safety rules.
    pub fn with_safety(mut self, safety: SafetyRules) -> Self {
        self.safety = safety;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Idle bench with nothing selected.
    pub fn initial_state(&self) -> LabState {
        LabState::new(self.config.ambient_temperature)
    }

    /// Dispatch an action to the matching operation.
    pub fn apply(&self, state: LabState, action: LabAction) -> LabState {
        match action {
            LabAction::Select(id) => self.select_experiment(state, id),
            LabAction::ToggleGoggles => self.toggle_goggles(state),
            LabAction::AddReagent(reagent) => self.add_reagent(state, reagent),
            LabAction::Heat(method) => self.heat_tube(state, method),
            LabAction::Shake => self.shake_tube(state),
            LabAction::Reset => self.reset_lab(state),
        }
    }

    /// Reset the bench and start a new experiment.
    pub fn select_experiment(&self, state: LabState, id: ExperimentId) -> LabState {
        let mut state = self.reset_lab(state);
        debug!(experiment = %id, "selecting experiment");
        state.selected_test = Some(id);
        state.hints = HintFlags::default();
        let name = self.catalog.display_name(id);
        state.messages.record(LogKind::Info, format!("Selected {name}."));
        state
    }

    /// Put goggles on or take them off. Allowed even after a failure.
    pub fn toggle_goggles(&self, mut state: LabState) -> LabState {
        state.has_goggles = !state.has_goggles;
        debug!(has_goggles = state.has_goggles, "toggled goggles");
        if state.has_goggles {
            state
                .messages
                .record(LogKind::Success, "Safety goggles put on.");
        } else {
            state.messages.record(
                LogKind::Warning,
                "Safety goggles removed. Warning: Eye hazard!",
            );
        }
        state
    }

    /// Pour a reagent or sample into the tube.
    pub fn add_reagent(&self, mut state: LabState, reagent: Reagent) -> LabState {
        if state.is_failed() {
            debug!(%reagent, "ignoring reagent on failed run");
            return state;
        }

        if let Some(advisory) = safety::handling_advisory(&state) {
            state.messages.record(LogKind::Warning, advisory);
        }

        // A standing result keeps its colour for the rest of the run.
        if state.status != LabStatus::Success {
            let into_empty = state.tube_contents.is_empty();
            state.tube_color = mixing::mix(&state.tube_color, reagent, into_empty);
        }
        state.tube_contents.push(reagent);
        state
            .messages
            .record(LogKind::Info, format!("Added {reagent}"));
        debug!(%reagent, contents = state.tube_contents.len(), "added reagent");

        self.react(&mut state, Trigger::Add(reagent));
        state
    }

    /// Apply a heat source. Unsafe heating fails the run.
    pub fn heat_tube(&self, mut state: LabState, method: HeatMethod) -> LabState {
        if state.is_failed() {
            debug!(?method, "ignoring heat on failed run");
            return state;
        }

        let violations = self
            .safety
            .heating_violations(&HeatingContext::new(&state, method));
        if !violations.is_empty() {
            return fail(state, &violations);
        }

        state.is_heated = true;
        state.temperature = match method {
            HeatMethod::Burner => self.config.burner_temperature,
            HeatMethod::Bath => self.config.bath_temperature,
        };
        state.messages.record(
            LogKind::Info,
            format!("Heating tube using {}...", method.label()),
        );

        self.react(&mut state, Trigger::Heat);
        state
    }

    /// Shake the tube to mix its contents.
    pub fn shake_tube(&self, mut state: LabState) -> LabState {
        if state.is_failed() {
            debug!("ignoring shake on failed run");
            return state;
        }

        state.is_shaken = true;
        state
            .messages
            .record(LogKind::Info, "Shaking test tube to mix contents...");

        self.react(&mut state, Trigger::Shake);
        state
    }

    /// Clear the tube. The selected test, goggles, the notebook, shown
    /// hints and the status history stay.
    pub fn reset_lab(&self, state: LabState) -> LabState {
        let mut next = LabState {
            selected_test: state.selected_test,
            has_goggles: state.has_goggles,
            hints: state.hints,
            messages: state.messages,
            history: state.history,
            ..self.initial_state()
        };
        if state.status != LabStatus::Idle {
            next.history = next
                .history
                .record(StatusTransition::now(state.status, LabStatus::Idle));
        }
        next.messages.record(LogKind::Info, "--- Lab Reset ---");
        debug!("lab reset");
        next
    }

    fn react(&self, state: &mut LabState, trigger: Trigger) -> Reaction {
        let rule = state.selected_test.and_then(|id| self.rules.get(id));
        let reaction = check::run(rule, state, trigger);
        debug!(?trigger, ?reaction, "reaction check");
        reaction
    }
}

/// The first violation fails the run; any others are noted as warnings.
fn fail(mut state: LabState, violations: &[SafetyViolation]) -> LabState {
    let Some((&reason, rest)) = violations.split_first() else {
        return state;
    };
    warn!(violation = %reason, "experiment failed");
    state.messages.record(LogKind::Error, reason.to_string());
    for violation in rest {
        state.messages.record(LogKind::Warning, violation.to_string());
    }
    state.failure = Some(reason);
    state.history = state
        .history
        .record(StatusTransition::now(state.status, LabStatus::Failed));
    state.status = LabStatus::Failed;
    state
}
