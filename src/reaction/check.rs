//! The reaction check.

use super::rule::{Hint, Outcome, ReactionRule, Trigger};
use crate::core::{LabState, LabStatus, StatusTransition};
use tracing::{debug, info};

/// What a reaction check did to the state.
#[derive(Clone, Debug, PartialEq)]
pub enum Reaction {
    /// No rule applies, or a sample or test reagent is missing.
    Inert,
    /// Reagents went in the wrong order; this tube will never react.
    WrongOrder,
    /// Everything is in the tube but the required action has not happened.
    Pending,
    /// The matching outcome only concludes on another trigger.
    Deferred,
    /// A result already stands for this run.
    AlreadyConcluded,
    /// A result was written to the state.
    Concluded(Outcome),
}

/// Evaluate `rule` against `state` right after the mutation that `trigger`
/// describes, applying any colour, status and notebook changes.
///
/// Must not be called on a failed run; the engine rejects those actions
/// before they reach this point.
pub fn run(rule: Option<&ReactionRule>, state: &mut LabState, trigger: Trigger) -> Reaction {
    let Some(rule) = rule else {
        return Reaction::Inert;
    };

    if !rule.reagents_present(state) {
        return Reaction::Inert;
    }

    if rule.order.is_some_and(|order| order.is_violated(state)) {
        show_hint(state, Hint::WrongOrder);
        return Reaction::WrongOrder;
    }

    if !rule.action.is_satisfied(state) {
        if let Some(hint) = rule.pending_hint {
            show_hint(state, hint);
        }
        return Reaction::Pending;
    }

    let Some(outcome) = rule.classify(state) else {
        return Reaction::Inert;
    };

    if outcome.only_on.is_some_and(|kind| kind != trigger.kind()) {
        return Reaction::Deferred;
    }

    if state.status == LabStatus::Success {
        return Reaction::AlreadyConcluded;
    }

    info!(
        experiment = %rule.experiment,
        positive = outcome.is_positive(),
        "{}",
        outcome.message
    );
    state.messages.record(outcome.kind, outcome.message.clone());
    state.tube_color = outcome.color.clone();
    state.history = state
        .history
        .record(StatusTransition::now(state.status, LabStatus::Success));
    state.status = LabStatus::Success;

    Reaction::Concluded(outcome.clone())
}

fn show_hint(state: &mut LabState, hint: Hint) {
    if state.hints.mark(hint) {
        debug!(?hint, "showing hint");
        state.messages.record(hint.kind(), hint.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExperimentId;
    use crate::core::{palette, Color, LogKind, Reagent};
    use crate::reaction::RuleTable;

    fn bench(test: ExperimentId, contents: &[Reagent]) -> LabState {
        let mut state = LabState::default();
        state.selected_test = Some(test);
        state.tube_contents = contents.to_vec();
        state
    }

    #[test]
    fn missing_rule_is_inert() {
        let mut state = bench(ExperimentId::Iodine, &[Reagent::SampleStarch, Reagent::Iodine]);
        assert_eq!(run(None, &mut state, Trigger::Shake), Reaction::Inert);
        assert_eq!(state.status, LabStatus::Idle);
    }

    #[test]
    fn iodine_concludes_on_add() {
        let table = RuleTable::standard();
        let mut state = bench(ExperimentId::Iodine, &[Reagent::SampleStarch, Reagent::Iodine]);

        let reaction = run(
            table.get(ExperimentId::Iodine),
            &mut state,
            Trigger::Add(Reagent::Iodine),
        );

        assert!(matches!(reaction, Reaction::Concluded(ref o) if o.is_positive()));
        assert_eq!(state.status, LabStatus::Success);
        assert_eq!(state.tube_color, Color::solid(palette::BLUE_BLACK));
        assert_eq!(state.messages.last().map(|e| e.kind), Some(LogKind::Success));
        assert_eq!(
            state.history.get_path(),
            vec![&LabStatus::Idle, &LabStatus::Success]
        );
    }

    #[test]
    fn negative_result_is_logged_as_info() {
        let table = RuleTable::standard();
        let mut state = bench(ExperimentId::Iodine, &[Reagent::SampleWater, Reagent::Iodine]);

        run(
            table.get(ExperimentId::Iodine),
            &mut state,
            Trigger::Add(Reagent::Iodine),
        );

        assert_eq!(state.status, LabStatus::Success);
        assert_eq!(state.tube_color, Color::solid(palette::ORANGE_BROWN));
        let last = state.messages.last().unwrap();
        assert_eq!(last.kind, LogKind::Info);
        assert!(last.text.contains("No starch"));
    }

    #[test]
    fn second_result_does_not_overwrite_first() {
        let table = RuleTable::standard();
        let rule = table.get(ExperimentId::Iodine);
        let mut state = bench(ExperimentId::Iodine, &[Reagent::SampleWater, Reagent::Iodine]);
        run(rule, &mut state, Trigger::Add(Reagent::Iodine));

        state.tube_contents.push(Reagent::SampleStarch);
        let reaction = run(rule, &mut state, Trigger::Add(Reagent::SampleStarch));

        assert_eq!(reaction, Reaction::AlreadyConcluded);
        assert_eq!(state.tube_color, Color::solid(palette::ORANGE_BROWN));
        assert_eq!(state.messages.count_containing("Result:"), 1);
    }

    #[test]
    fn benedicts_negative_waits_for_heat_trigger() {
        let table = RuleTable::standard();
        let rule = table.get(ExperimentId::Benedicts);
        let mut state = bench(
            ExperimentId::Benedicts,
            &[Reagent::Benedicts, Reagent::SampleStarch],
        );
        state.is_heated = true;

        assert_eq!(
            run(rule, &mut state, Trigger::Add(Reagent::SampleStarch)),
            Reaction::Deferred
        );
        assert_eq!(state.status, LabStatus::Idle);

        assert!(matches!(
            run(rule, &mut state, Trigger::Heat),
            Reaction::Concluded(_)
        ));
        assert_eq!(state.tube_color, Color::solid(palette::BLUE));
    }

    #[test]
    fn pending_hint_is_written_once() {
        let table = RuleTable::standard();
        let rule = table.get(ExperimentId::Biuret);
        let mut state = bench(
            ExperimentId::Biuret,
            &[Reagent::SampleProtein, Reagent::BiuretA, Reagent::BiuretB],
        );

        for _ in 0..3 {
            assert_eq!(
                run(rule, &mut state, Trigger::Add(Reagent::BiuretB)),
                Reaction::Pending
            );
        }
        assert_eq!(state.messages.count_containing(Hint::Mix.text()), 1);
        assert!(state.hints.mix);
    }

    #[test]
    fn wrong_order_blocks_result_even_when_shaken() {
        let table = RuleTable::standard();
        let rule = table.get(ExperimentId::Ethanol);
        let mut state = bench(
            ExperimentId::Ethanol,
            &[Reagent::Water, Reagent::Ethanol, Reagent::SampleLipid],
        );
        state.is_shaken = true;

        assert_eq!(run(rule, &mut state, Trigger::Shake), Reaction::WrongOrder);
        assert_eq!(run(rule, &mut state, Trigger::Shake), Reaction::WrongOrder);
        assert_eq!(state.status, LabStatus::Idle);
        assert_eq!(state.messages.count_containing("Nothing happened"), 1);
        assert_eq!(
            state.messages.last().map(|e| e.kind),
            Some(LogKind::Warning)
        );
    }

    #[test]
    fn correct_order_without_shake_stays_silent() {
        let table = RuleTable::standard();
        let mut state = bench(
            ExperimentId::Ethanol,
            &[Reagent::SampleLipid, Reagent::Ethanol, Reagent::Water],
        );
        let reaction = run(
            table.get(ExperimentId::Ethanol),
            &mut state,
            Trigger::Add(Reagent::Water),
        );
        assert_eq!(reaction, Reaction::Pending);
        assert!(state.messages.is_empty());
    }
}
