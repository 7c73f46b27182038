//! Reaction rules and the reaction check.
//!
//! Each experiment's chemistry is a [`ReactionRule`] entry in a
//! [`RuleTable`] rather than a branch in a conditional chain. A rule names
//! the reagents it needs, the physical action that must have happened, an
//! optional add-order constraint, and an ordered list of outcomes that
//! classify the sample.
//!
//! The check itself ([`check::run`]) is evaluated synchronously after the
//! mutation that triggered it, so it always sees the post-action state.

pub mod check;
pub mod mixing;
pub mod rule;
pub mod table;

pub use check::Reaction;
pub use rule::{
    Hint, OrderConstraint, Outcome, ReactionRule, RequiredAction, Trigger, TriggerKind,
};
pub use table::{RuleTable, DEFAULT_TRANSITION};
