//! Read-only snapshots of the bench for the presentation layer.
//!
//! A snapshot wraps a [`LabState`] with a format version and capture time so
//! it can cross a process or language boundary as JSON or as compact
//! binary. The crate never writes snapshots to disk.

use crate::core::LabState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned capture of a bench state.
///
/// # Example
///
/// ```rust
/// use biolab::engine::LabEngine;
/// use biolab::snapshot::LabSnapshot;
///
/// let engine = LabEngine::new();
/// let state = engine.toggle_goggles(engine.initial_state());
///
/// let json = LabSnapshot::capture(&state).to_json().unwrap();
/// let restored = LabSnapshot::from_json(&json).unwrap();
/// assert_eq!(restored.state, state);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The captured state
    pub state: LabState,
}

impl LabSnapshot {
    pub fn capture(state: &LabState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExperimentId;
    use crate::core::Reagent;
    use crate::engine::{HeatMethod, LabEngine};

    fn finished_run() -> LabState {
        let engine = LabEngine::new();
        let state = engine.toggle_goggles(engine.initial_state());
        let state = engine.select_experiment(state, ExperimentId::Benedicts);
        let state = engine.add_reagent(state, Reagent::SampleGlucose);
        let state = engine.add_reagent(state, Reagent::Benedicts);
        engine.heat_tube(state, HeatMethod::Bath)
    }

    #[test]
    fn binary_snapshot_restores_state() {
        let snapshot = LabSnapshot::capture(&finished_run());
        let bytes = snapshot.to_bytes().unwrap();
        let restored = LabSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn failed_run_survives_json() {
        let engine = LabEngine::new();
        let failed = engine.heat_tube(engine.initial_state(), HeatMethod::Burner);
        let json = LabSnapshot::capture(&failed).to_json().unwrap();
        let restored = LabSnapshot::from_json(&json).unwrap();
        assert_eq!(restored.state.failure_reason(), failed.failure_reason());
    }

    #[test]
    fn foreign_version_is_rejected() {
        let mut snapshot = LabSnapshot::capture(&LabState::default());
        snapshot.version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();

        match LabSnapshot::from_json(&json) {
            Err(SnapshotError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 99);
                assert_eq!(supported, SNAPSHOT_VERSION);
            }
            other => panic!("Expected version error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = LabSnapshot::from_bytes(&[0xff, 0x01]);
        assert!(matches!(
            result,
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
