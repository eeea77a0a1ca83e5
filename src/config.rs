//! Configuration management for the medical report scanner

use crate::analysis::vocabulary::{default_conditions, default_risk_factors};
use crate::error::{MedScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Term lists checked against report content. Defaults to the built-in
/// vocabulary; editable so deployments can extend the term sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub conditions: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Confidence contributed by each occurrence of a condition term.
    pub occurrence_weight: u32,
    /// Upper bound for confidence scores (at most 100).
    pub max_confidence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig {
                conditions: default_conditions(),
                risk_factors: default_risk_factors(),
            },
            scoring: ScoringConfig {
                occurrence_weight: 20,
                max_confidence: 100,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MedScanError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MedScanError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("medscan")
            .join("config.toml")
    }
}
