//! Configuration loading from TOML.
//!
//! Reads `seqscan.toml` and deserializes into strongly-typed structs.
//! Every section is optional; a missing file falls back to the built-in
//! demo samples.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::{PriceSequence, SeqscanError};

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "seqscan.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub samples: SampleSet,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "seqscan=info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// A named sequence fed to the demo runner.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub name: String,
    pub values: PriceSequence,
}

impl SampleConfig {
    pub fn new(name: &str, values: &[i64]) -> Self {
        Self {
            name: name.to_string(),
            values: PriceSequence::from(values),
        }
    }
}

/// List of samples; defaults to the seven built-in demo sequences.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct SampleSet(pub Vec<SampleConfig>);

impl Default for SampleSet {
    fn default() -> Self {
        Self(vec![
            SampleConfig::new("A1", &[2, 3, 5, 2, 3, 4, 6, 4, 1]),
            SampleConfig::new("A2", &[1, 5, 3, 2, 6, 6, 10, 4, 7, 2, 1]),
            SampleConfig::new("A3", &[1, 2, 3, 3, 2]),
            SampleConfig::new("A4", &[5, 10, 3]),
            SampleConfig::new("A5", &[1, 2]),
            SampleConfig::new("A6", &[1]),
            SampleConfig::new("A7", &[]),
        ])
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using built-in samples");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SeqscanError> {
        if let Some(pos) = self.samples.0.iter().position(|s| s.name.trim().is_empty()) {
            return Err(SeqscanError::Config(format!(
                "sample #{pos} has an empty name"
            )));
        }
        Ok(())
    }
}
