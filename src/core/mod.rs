//! Core lab types.
//!
//! This module contains the plain data the engine works on:
//! - Reagents and food samples
//! - Tube colours as an explicit sum type
//! - The caller-owned `LabState` with its notebook and status history
//!
//! Nothing in here performs I/O.

mod color;
mod history;
mod notebook;
mod reagent;
mod state;

pub use color::{palette, Color};
pub use history::{StatusHistory, StatusTransition};
pub use notebook::{LogEntry, LogKind, Notebook};
pub use reagent::{Reagent, UnknownReagent};
pub use state::{HintFlags, LabState, LabStatus, AMBIENT_TEMPERATURE};
