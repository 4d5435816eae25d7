//! Configuration management for the face engagement analyzer

use crate::{pnp::PnpConfig, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Head pose solver tuning
    pub pose: PnpConfig,

    /// Detector collaborator configuration
    pub detector: DetectorConfig,

    /// Result output configuration
    pub output: OutputConfig,
}

/// Detector collaborator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Recorded detection file replayed instead of a live model
    pub recording: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the YAML is malformed
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.pose.max_iterations == 0 {
            return Err(Error::ConfigError(
                "Pose max_iterations must be greater than 0".to_string(),
            ));
        }
        if !(self.pose.step_tolerance.is_finite() && self.pose.step_tolerance > 0.0) {
            return Err(Error::ConfigError(
                "Pose step_tolerance must be a positive number".to_string(),
            ));
        }
        if !(self.pose.cost_tolerance.is_finite() && self.pose.cost_tolerance > 0.0) {
            return Err(Error::ConfigError(
                "Pose cost_tolerance must be a positive number".to_string(),
            ));
        }

        if let Some(recording) = &self.detector.recording {
            if !recording.exists() {
                return Err(Error::ConfigError(format!(
                    "Recorded detection not found: {}",
                    recording.display()
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Engagement Configuration

# Head pose solver
pose:
  max_iterations: 100
  step_tolerance: 1.0e-10
  cost_tolerance: 1.0e-10

# Detector collaborator
detector:
  # recording: "detections/frontal.yaml"
  recording: null

# Result output
output:
  pretty: true
"#;
