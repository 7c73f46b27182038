//! Safety violations that end an experiment run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unconditional hazards. Any of these fails the run immediately.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyViolation {
    #[error("Safety Violation: Heating substances without eye protection is dangerous!")]
    EyeProtection,

    #[error(
        "DANGER: Ethanol is highly flammable! Never heat it directly over a Bunsen burner. Use a water bath."
    )]
    FlammableOverFlame,
}

/// Advisory notice for handling chemicals without goggles.
pub const UNPROTECTED_HANDLING: &str = "Warning: Handling chemicals without safety goggles!";
