//! Finite-difference configuration
//!
//! Controls the step of the central differences and the tolerance used to
//! detect the polar singularity of spherical coordinates.

use crate::error::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};

/// Default central-difference step
pub const DEFAULT_STEP: f64 = 0.0001;

/// Default bound under which `|sin(theta)|` counts as zero
pub const DEFAULT_POLE_TOLERANCE: f64 = 1e-12;

/// Settings shared by every operator of a field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceConfig {
    /// Step `h` of `(f(p + h) - f(p - h)) / 2h`
    pub step: f64,
    /// Spherical points with `|sin(theta)|` at or below this are singular
    pub pole_tolerance: f64,
}

impl Default for DifferenceConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            pole_tolerance: DEFAULT_POLE_TOLERANCE,
        }
    }
}

impl DifferenceConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different difference step
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> FieldResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "step must be a positive finite number, got {}",
                self.step
            )));
        }

        if !self.pole_tolerance.is_finite() || self.pole_tolerance < 0.0 {
            return Err(FieldError::InvalidConfig(format!(
                "pole_tolerance must be a non-negative finite number, got {}",
                self.pole_tolerance
            )));
        }

        Ok(())
    }
}
