//! RON config loader
//!
//! Loads the leveling config from an external RON file, with fallback to
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LevelError};
use crate::progression::{CurveParams, LevelCurve, RewardTable};

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/leveling.ron";

/// Curve shape and reward amounts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    pub curve: CurveParams,
    pub rewards: RewardTable,
}

impl LevelingConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: LevelingConfig = ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.curve.validate()?;
        Ok(config)
    }

    /// Load a config file, failing on any read, parse or validation error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&text, path)?;
        log::info!("Leveling config loaded from {:?}", path);
        Ok(config)
    }

    /// Load a config file, or use defaults if it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No leveling config at {:?}, using defaults", path);
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}. Using default leveling config.", e);
            Self::default()
        })
    }

    /// Pretty RON text for this config
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Write this config, creating parent directories as needed
    pub fn export(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_ron()?).map_err(io_err)?;
        log::info!("Leveling config written to {:?}", path);
        Ok(())
    }

    pub fn build_curve(&self) -> Result<LevelCurve, LevelError> {
        LevelCurve::new(self.curve)
    }
}
