//! Config loading, validation, and discovery.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{BkError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BkError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BkError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.bkreview.yaml` from `dir` if it exists, defaults otherwise.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            log::debug!("loading config from {}", candidate.display());
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BkError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| BkError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `executable` must be non-empty
    /// - `locale` must be non-empty
    /// - `repository`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.executable.trim().is_empty() {
            return Err(BkError::UserError(
                "config validation failed: executable must not be empty".to_string(),
            ));
        }

        if self.locale.trim().is_empty() {
            return Err(BkError::UserError(
                "config validation failed: locale must not be empty".to_string(),
            ));
        }

        if matches!(self.repository.as_deref(), Some(r) if r.trim().is_empty()) {
            return Err(BkError::UserError(
                "config validation failed: repository must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}
