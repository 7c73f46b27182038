//! Reagents and food samples that can be added to the test tube.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown reagent identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown reagent '{0}'")]
pub struct UnknownReagent(pub String);

/// A chemical or food sample that can be poured into the tube.
///
/// The serialized form uses the identifiers the lab shelf is keyed on
/// (`benedicts`, `biuretA`, `sample_glucose`, ...).
///
/// # Example
///
/// ```rust
/// use biolab::core::Reagent;
///
/// let reagent: Reagent = "sample_glucose_low".parse().unwrap();
/// assert_eq!(reagent, Reagent::SampleGlucoseLow);
/// assert!(reagent.is_sample());
/// assert_eq!(reagent.to_string(), "Sample: glucose_low");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reagent {
    #[serde(rename = "benedicts")]
    Benedicts,
    #[serde(rename = "iodine")]
    Iodine,
    #[serde(rename = "biuretA")]
    BiuretA,
    #[serde(rename = "biuretB")]
    BiuretB,
    #[serde(rename = "ethanol")]
    Ethanol,
    #[serde(rename = "water")]
    Water,
    #[serde(rename = "sample_starch")]
    SampleStarch,
    #[serde(rename = "sample_glucose")]
    SampleGlucose,
    #[serde(rename = "sample_glucose_low")]
    SampleGlucoseLow,
    #[serde(rename = "sample_protein")]
    SampleProtein,
    #[serde(rename = "sample_lipid")]
    SampleLipid,
    #[serde(rename = "sample_water")]
    SampleWater,
}

impl Reagent {
    /// Every reagent on the shelf, test reagents first.
    pub const ALL: [Reagent; 12] = [
        Reagent::Benedicts,
        Reagent::Iodine,
        Reagent::BiuretA,
        Reagent::BiuretB,
        Reagent::Ethanol,
        Reagent::Water,
        Reagent::SampleStarch,
        Reagent::SampleGlucose,
        Reagent::SampleGlucoseLow,
        Reagent::SampleProtein,
        Reagent::SampleLipid,
        Reagent::SampleWater,
    ];

    /// Stable identifier, identical to the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Benedicts => "benedicts",
            Self::Iodine => "iodine",
            Self::BiuretA => "biuretA",
            Self::BiuretB => "biuretB",
            Self::Ethanol => "ethanol",
            Self::Water => "water",
            Self::SampleStarch => "sample_starch",
            Self::SampleGlucose => "sample_glucose",
            Self::SampleGlucoseLow => "sample_glucose_low",
            Self::SampleProtein => "sample_protein",
            Self::SampleLipid => "sample_lipid",
            Self::SampleWater => "sample_water",
        }
    }

    /// Label printed on the bottle.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Benedicts => "Benedict's",
            Self::Iodine => "Iodine",
            Self::BiuretA => "Biuret A",
            Self::BiuretB => "Biuret B",
            Self::Ethanol => "Ethanol",
            Self::Water => "Water",
            Self::SampleStarch => "Starch",
            Self::SampleGlucose => "Glucose (High)",
            Self::SampleGlucoseLow => "Glucose (Low)",
            Self::SampleProtein => "Protein",
            Self::SampleLipid => "Lipid",
            Self::SampleWater => "Water",
        }
    }

    /// Whether this is a food sample rather than a test reagent.
    pub fn is_sample(&self) -> bool {
        self.id().starts_with("sample_")
    }

    /// Whether the reagent ignites over an open flame.
    pub fn is_flammable(&self) -> bool {
        matches!(self, Self::Ethanol)
    }
}

impl fmt::Display for Reagent {
    /// Notebook rendering: samples read as `Sample: <name>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id().strip_prefix("sample_") {
            Some(name) => write!(f, "Sample: {name}"),
            None => f.write_str(self.id()),
        }
    }
}

impl FromStr for Reagent {
    type Err = UnknownReagent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.id() == s)
            .ok_or_else(|| UnknownReagent(s.to_string()))
    }
}
