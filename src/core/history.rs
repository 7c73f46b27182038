//! Status transition history.
//!
//! Tracks every change of [`LabStatus`] across a session, including the
//! returns to idle caused by resets.

use super::state::LabStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single status change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusTransition {
    /// The status being left
    pub from: LabStatus,
    /// The status being entered
    pub to: LabStatus,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl StatusTransition {
    pub fn now(from: LabStatus, to: LabStatus) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of status transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use biolab::core::{LabStatus, StatusHistory, StatusTransition};
///
/// let history = StatusHistory::new()
///     .record(StatusTransition::now(LabStatus::Idle, LabStatus::Failed))
///     .record(StatusTransition::now(LabStatus::Failed, LabStatus::Idle));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&LabStatus::Idle, &LabStatus::Failed, &LabStatus::Idle]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusHistory {
    transitions: Vec<StatusTransition>,
}

impl StatusHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StatusTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Statuses traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&LabStatus> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and the last transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of runs that ended in the given status.
    pub fn count_reached(&self, status: LabStatus) -> usize {
        self.transitions.iter().filter(|t| t.to == status).count()
    }

    pub fn transitions(&self) -> &[StatusTransition] {
        &self.transitions
    }
}
