//! Bench safety rules.
//!
//! Heating checks use Stillwater's `Validation` so every hazard present at
//! the moment of heating is reported together rather than one at a time.
//! Any reported violation fails the run; the first one becomes the failure
//! reason.
//!
//! # Example
//!
//! ```rust
//! use biolab::core::{LabState, Reagent};
//! use biolab::engine::HeatMethod;
//! use biolab::safety::{HeatingContext, SafetyRules, SafetyViolation};
//!
//! let mut state = LabState::default();
//! state.tube_contents.push(Reagent::Ethanol);
//!
//! let rules = SafetyRules::standard();
//! let violations = rules.heating_violations(&HeatingContext::new(&state, HeatMethod::Burner));
//! assert_eq!(
//!     violations,
//!     vec![SafetyViolation::EyeProtection, SafetyViolation::FlammableOverFlame]
//! );
//! ```

pub mod context;
pub mod rules;
pub mod violations;

pub use context::HeatingContext;
pub use rules::SafetyRules;
pub use violations::{SafetyViolation, UNPROTECTED_HANDLING};

use crate::core::LabState;

/// Advisory for pouring chemicals without goggles. Never fails the run.
pub fn handling_advisory(state: &LabState) -> Option<&'static str> {
    (!state.has_goggles).then_some(UNPROTECTED_HANDLING)
}
