//! Bench configuration.
//!
//! All fields are optional in JSON; anything omitted keeps the standard
//! bench value.

use crate::core::AMBIENT_TEMPERATURE;
use crate::reaction::DEFAULT_TRANSITION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Physical constants of the simulated bench.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Temperature of an unheated tube, °C
    pub ambient_temperature: f64,
    /// Tube temperature over a Bunsen burner, °C
    pub burner_temperature: f64,
    /// Tube temperature in a water bath, °C
    pub bath_temperature: f64,
    /// Length of multi-stage colour changes, in milliseconds
    #[serde(with = "millis")]
    pub color_transition: Duration,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            ambient_temperature: AMBIENT_TEMPERATURE,
            burner_temperature: 100.0,
            bath_temperature: 80.0,
            color_transition: DEFAULT_TRANSITION,
        }
    }
}

impl LabConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Temperatures must be finite and heat sources hotter than ambient.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let temperatures = [
            ("ambient_temperature", self.ambient_temperature),
            ("burner_temperature", self.burner_temperature),
            ("bath_temperature", self.bath_temperature),
        ];
        if let Some((name, _)) = temperatures.iter().find(|(_, t)| !t.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be a finite number")));
        }
        if self.burner_temperature <= self.ambient_temperature
            || self.bath_temperature <= self.ambient_temperature
        {
            return Err(ConfigError::Invalid(
                "heat sources must be hotter than the ambient temperature".to_string(),
            ));
        }
        Ok(())
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
