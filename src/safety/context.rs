//! Context provided to safety checks.

use crate::core::{LabState, Reagent};
use crate::engine::HeatMethod;

/// What the bench looks like at the moment a heat source is applied.
#[derive(Clone, Debug)]
pub struct HeatingContext<'a> {
    pub method: HeatMethod,
    pub has_goggles: bool,
    pub contents: &'a [Reagent],
}

impl<'a> HeatingContext<'a> {
    pub fn new(state: &'a LabState, method: HeatMethod) -> Self {
        Self {
            method,
            has_goggles: state.has_goggles,
            contents: &state.tube_contents,
        }
    }

    /// Whether anything in the tube would ignite (pure).
    pub fn has_flammable(&self) -> bool {
        self.contents.iter().any(Reagent::is_flammable)
    }
}
