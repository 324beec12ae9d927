//! Configuration system for eigenear.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::EigenearError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Competitive-learning network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of competitive units
    pub n_units: usize,
    /// Weight vector length per unit (input window size)
    pub synapse_count: usize,
    /// Winner adaptation rate (alpha)
    pub learning_rate: f32,
    /// Per-step drift of all weights toward uniform noise (beta)
    pub forget_rate: f32,
}

/// Synthetic frame source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Magnitude samples per frame (frequency bins)
    pub frame_len: usize,
    /// Number of spectral peaks per scene
    pub n_peaks: usize,
    /// Uniform noise floor added to every bin
    pub noise_floor: f32,
    /// Frames between scene (timbre) changes
    pub scene_interval: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Steps between stats logging
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            source: SourceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            n_units: 10,
            synapse_count: 40,
            learning_rate: 1e-2,
            forget_rate: 1e-5,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            frame_len: 128,
            n_peaks: 3,
            noise_floor: 0.05,
            scene_interval: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), EigenearError> {
        self.network.validate()?;
        if self.source.frame_len < self.network.synapse_count {
            return Err(EigenearError::InvalidConfiguration(format!(
                "frame_len ({}) must be >= synapse_count ({})",
                self.source.frame_len, self.network.synapse_count
            )));
        }
        if self.source.scene_interval == 0 {
            return Err(EigenearError::InvalidConfiguration(
                "scene_interval must be > 0".to_string(),
            ));
        }
        if self.logging.stats_interval == 0 {
            return Err(EigenearError::InvalidConfiguration(
                "stats_interval must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl NetworkConfig {
    /// Validate network parameters. Checked once at construction, not per frame.
    pub fn validate(&self) -> Result<(), EigenearError> {
        if self.n_units == 0 {
            return Err(EigenearError::InvalidConfiguration(
                "n_units must be > 0".to_string(),
            ));
        }
        if self.synapse_count == 0 {
            return Err(EigenearError::InvalidConfiguration(
                "synapse_count must be > 0".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate < 0.0 {
            return Err(EigenearError::InvalidConfiguration(format!(
                "learning_rate must be finite and >= 0, got {}",
                self.learning_rate
            )));
        }
        if !self.forget_rate.is_finite() || self.forget_rate < 0.0 {
            return Err(EigenearError::InvalidConfiguration(format!(
                "forget_rate must be finite and >= 0, got {}",
                self.forget_rate
            )));
        }
        Ok(())
    }
}
