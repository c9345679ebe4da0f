//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// What a folder load does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderPolicy {
    /// The first failing file aborts the whole folder
    #[default]
    AbortOnError,
    /// Failing files are recorded and the remaining files are still processed
    SkipAndReport,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Failure policy for folder processing
    pub folder_policy: FolderPolicy,

    /// Maximum joined document text length (bytes)
    pub max_text_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Strict preset: any failing file aborts a folder run
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient preset: failing files are skipped and reported
    pub fn lenient() -> Self {
        Self {
            folder_policy: FolderPolicy::SkipAndReport,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            folder_policy: FolderPolicy::AbortOnError,
            max_text_length: 1_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.folder_policy, FolderPolicy::AbortOnError);
    }

    #[test]
    fn test_lenient_config() {
        let config = ExtractorConfig::lenient();
        assert!(config.validate().is_ok());
        assert_eq!(config.folder_policy, FolderPolicy::SkipAndReport);
    }

    #[test]
    fn test_invalid_max_text_length() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml(r#"folder_policy = "skip_and_report""#).unwrap();
        assert_eq!(config.folder_policy, FolderPolicy::SkipAndReport);
        assert_eq!(config.max_text_length, ExtractorConfig::default().max_text_length);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(ExtractorConfig::from_toml(r#"folder_policy = "sometimes""#).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient();
        let parsed = ExtractorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
