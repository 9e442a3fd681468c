//! Preprocessing configuration (`preprocess.json`) parsing.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_N_EMISSION;
use crate::quantize::bucket_width_degrees;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("n_emission must be at least 1")]
    ZeroEmissionAlphabet,
}

/// Tuning parameters of the preprocessing pipeline.
///
/// Unknown fields are rejected at parse time, so a typo in a config file
/// fails loudly instead of silently falling back to a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PreprocessConfig {
    /// Emission alphabet size.
    pub n_emission: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            n_emission: DEFAULT_N_EMISSION,
        }
    }
}

impl fmt::Display for PreprocessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n_emission: {}", self.n_emission)?;
        writeln!(f, "bucket_width_degrees: {}", self.bucket_width_degrees())
    }
}

impl PreprocessConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("parse preprocess config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let json = std::fs::read_to_string(path_ref)
            .with_context(|| format!("read {}", path_ref.display()))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_emission == 0 {
            return Err(ConfigError::ZeroEmissionAlphabet);
        }
        Ok(())
    }

    #[must_use]
    pub fn bucket_width_degrees(&self) -> usize {
        bucket_width_degrees(self.n_emission)
    }
}

#[cfg(test)]
mod tests {
    use super::PreprocessConfig;

    #[test]
    fn default_alphabet_has_ten_symbols() {
        let config = PreprocessConfig::default();
        assert_eq!(config.n_emission, 10);
        assert_eq!(config.bucket_width_degrees(), 19);
        config.validate().expect("default config is valid");
    }

    #[test]
    fn parse_config_smoke() {
        let config = PreprocessConfig::from_json_str(r#"{ "n_emission": 6 }"#).expect("parse");
        assert_eq!(config.n_emission, 6);
        assert_eq!(config.bucket_width_degrees(), 31);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = PreprocessConfig::from_json_str("{}").expect("parse");
        assert_eq!(config.n_emission, 10);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PreprocessConfig::from_json_str(r#"{ "n_emision": 6 }"#).unwrap_err();
        assert!(err.to_string().contains("parse preprocess config"));
    }

    #[test]
    fn zero_alphabet_is_rejected() {
        let err = PreprocessConfig::from_json_str(r#"{ "n_emission": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("n_emission"));
    }

    #[test]
    fn display_lists_fields_line_per_line() {
        let text = PreprocessConfig::default().to_string();
        assert_eq!(text, "n_emission: 10\nbucket_width_degrees: 19\n");
    }
}
