//! The lab notebook: an append-only log of observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notebook entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warning,
    Success,
    Error,
}

/// A single timestamped observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: LogKind,
    pub text: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }
}

/// Ordered, append-only record of everything that happened at the bench.
///
/// Entries survive lab resets so the notebook keeps the whole session trail.
///
/// # Example
///
/// ```rust
/// use biolab::core::{LogKind, Notebook};
///
/// let mut notebook = Notebook::new();
/// notebook.record(LogKind::Info, "Selected Iodine Test.");
/// notebook.record(LogKind::Warning, "Safety goggles removed. Warning: Eye hazard!");
///
/// assert_eq!(notebook.len(), 2);
/// assert_eq!(notebook.count_containing("goggles"), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    entries: Vec<LogEntry>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, kind: LogKind, text: impl Into<String>) {
        self.entries.push(LogEntry::new(kind, text));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose text contains `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.text.contains(needle))
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.count_containing(needle) > 0
    }

    /// Entries of a single kind, in order.
    pub fn of_kind(&self, kind: LogKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}
