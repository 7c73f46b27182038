//! BioLab: a pure, deterministic engine for virtual food-test labs
//!
//! BioLab follows a "pure core, imperative shell" split. The engine is a
//! set of pure transitions over a caller-owned [`LabState`]: each action
//! takes the current state and returns the next one, and the reaction check
//! runs synchronously right after the mutation that triggered it. Rendering,
//! animation and persistence belong to the caller.
//!
//! # Core Concepts
//!
//! - **State**: the bench as a plain value ([`core::LabState`])
//! - **Catalog**: static experiment definitions ([`catalog::Catalog`])
//! - **Reactions**: per-experiment rules in a table ([`reaction::RuleTable`])
//! - **Safety**: heating checks that accumulate every violation ([`safety`])
//!
//! # Example
//!
//! ```rust
//! use biolab::catalog::ExperimentId;
//! use biolab::core::{LabStatus, Reagent};
//! use biolab::engine::LabEngine;
//!
//! let engine = LabEngine::new();
//! let mut state = engine.initial_state();
//! state = engine.toggle_goggles(state);
//! state = engine.select_experiment(state, ExperimentId::Biuret);
//! for reagent in [Reagent::SampleProtein, Reagent::BiuretA, Reagent::BiuretB] {
//!     state = engine.add_reagent(state, reagent);
//! }
//! assert_eq!(state.status, LabStatus::Idle);
//!
//! state = engine.shake_tube(state);
//! assert_eq!(state.status, LabStatus::Success);
//! assert_eq!(state.tube_color.final_value(), "#9333ea");
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod reaction;
pub mod safety;
pub mod snapshot;

// Re-export commonly used types
pub use catalog::{Catalog, ExperimentDefinition, ExperimentId};
pub use config::LabConfig;
pub use core::{Color, LabState, LabStatus, LogKind, Reagent};
pub use engine::{HeatMethod, LabAction, LabEngine};
pub use snapshot::LabSnapshot;
