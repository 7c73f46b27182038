//! Tube colours.
//!
//! The engine never interpolates colours itself. It emits either a single
//! solid value or an ordered list of stages the presentation layer animates
//! through over a fixed duration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CSS colour values used by the lab.
pub mod palette {
    pub const TRANSPARENT: &str = "transparent";
    pub const BLUE: &str = "#3b82f6";
    pub const LIGHT_BLUE: &str = "#60a5fa";
    pub const PALE_BLUE: &str = "#bfdbfe";
    pub const GREEN: &str = "#22c55e";
    pub const YELLOW: &str = "#eab308";
    pub const ORANGE: &str = "#f97316";
    pub const BRICK_RED: &str = "#ef4444";
    pub const ORANGE_BROWN: &str = "#d97706";
    pub const BLUE_BLACK: &str = "#0f172a";
    pub const PURPLE: &str = "#9333ea";
    pub const WHITE: &str = "#ffffff";
    pub const SAMPLE: &str = "#f1f5f9";
}

/// Colour of the tube contents.
///
/// # Example
///
/// ```rust
/// use biolab::core::{palette, Color};
/// use std::time::Duration;
///
/// let fade = Color::transition(
///     [palette::BLUE, palette::GREEN, palette::YELLOW],
///     Duration::from_secs(5),
/// );
/// assert_eq!(fade.final_value(), palette::YELLOW);
/// assert_eq!(Color::solid(palette::PURPLE).final_value(), palette::PURPLE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// A single steady colour.
    Solid(String),
    /// A timed sequence of colours ending on the last stage.
    Transition { stages: Vec<String>, duration: Duration },
}

impl Color {
    pub fn solid(value: impl Into<String>) -> Self {
        Self::Solid(value.into())
    }

    pub fn transition<I, V>(stages: I, duration: Duration) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::Transition {
            stages: stages.into_iter().map(Into::into).collect(),
            duration,
        }
    }

    /// The colour the tube settles on once any animation finishes.
    ///
    /// An empty transition reads as transparent.
    pub fn final_value(&self) -> &str {
        match self {
            Self::Solid(value) => value,
            Self::Transition { stages, .. } => stages
                .last()
                .map(String::as_str)
                .unwrap_or(palette::TRANSPARENT),
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transition { .. })
    }

    /// Rewrite the duration of a transition, leaving solid colours alone.
    pub(crate) fn with_duration(self, duration: Duration) -> Self {
        match self {
            Self::Transition { stages, .. } => Self::Transition { stages, duration },
            solid => solid,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::solid(palette::TRANSPARENT)
    }
}
