//! Sampler configuration stored in ~/.thomsample/config.json

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// Ranking defaults.
///
/// Every field has a serde default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplerConfig {
    /// Sort ranked candidates by sampled score (descending).
    #[serde(default = "default_sort")]
    pub sort: bool,
    /// Prior pseudo-counts used when a caller supplies no priors.
    #[serde(default)]
    pub default_prior: PriorConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            default_prior: PriorConfig::default(),
        }
    }
}

fn default_sort() -> bool {
    true
}

/// Beta prior pseudo-counts; 1.0 / 1.0 is the uniform prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorConfig {
    #[serde(default = "default_pseudo_count")]
    pub positive: f64,
    #[serde(default = "default_pseudo_count")]
    pub negative: f64,
}

impl Default for PriorConfig {
    fn default() -> Self {
        Self {
            positive: default_pseudo_count(),
            negative: default_pseudo_count(),
        }
    }
}

fn default_pseudo_count() -> f64 {
    1.0
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), SamplingError> {
        let PriorConfig { positive, negative } = self.default_prior;
        for (name, value) in [("positive", positive), ("negative", negative)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SamplingError::ConfigurationError(format!(
                    "defaultPrior.{} must be finite and > 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Get the canonical config file path (~/.thomsample/config.json)
pub fn default_config_path() -> Result<PathBuf, SamplingError> {
    let home = dirs::home_dir().ok_or_else(|| {
        SamplingError::ConfigurationError("Could not find home directory".to_string())
    })?;
    Ok(home.join(".thomsample").join("config.json"))
}

/// Load configuration from the default path, falling back to defaults when
/// no file exists.
pub fn load_config() -> Result<SamplerConfig, SamplingError> {
    let path = default_config_path()?;
    if !path.exists() {
        log::debug!("No sampler config at {}, using defaults", path.display());
        return Ok(SamplerConfig::default());
    }
    load_config_from(&path)
}

/// Load and validate a config file.
pub fn load_config_from(path: &Path) -> Result<SamplerConfig, SamplingError> {
    let content = fs::read_to_string(path)?;
    let config: SamplerConfig = serde_json::from_str(&content)?;

    if let Err(e) = config.validate() {
        log::warn!("Rejecting sampler config {}: {}", path.display(), e);
        return Err(e);
    }

    log::info!(
        "Loaded sampler config from {} (sort={}, prior={}/{})",
        path.display(),
        config.sort,
        config.default_prior.positive,
        config.default_prior.negative
    );
    Ok(config)
}

/// Write a config file as pretty JSON, creating parent directories.
pub fn save_config_to(path: &Path, config: &SamplerConfig) -> Result<(), SamplingError> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
