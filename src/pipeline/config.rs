//! Pipeline configuration and config file loading.
//!
//! Supports TOML and JSON, with the format auto-detected from the file
//! extension.

use crate::core::{DiffResult, OcrDiffError};
use crate::domain::LanguageCode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for an [`crate::pipeline::OcrDiff`] pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrDiffConfig {
    /// Language code forwarded to the recognition engine.
    #[serde(default)]
    pub language: LanguageCode,

    /// Run the two extractions of a comparison concurrently.
    /// The extractions are independent, so this only trades latency.
    #[serde(default = "OcrDiffConfig::default_parallel_extraction")]
    pub parallel_extraction: bool,
}

impl OcrDiffConfig {
    fn default_parallel_extraction() -> bool {
        true
    }
}

impl Default for OcrDiffConfig {
    fn default() -> Self {
        Self {
            language: LanguageCode::default(),
            parallel_extraction: Self::default_parallel_extraction(),
        }
    }
}

/// Configuration file format
#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration loader for the comparison pipeline
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file, auto-detecting the format from the extension
    pub fn load_from_file(path: &Path) -> DiffResult<OcrDiffConfig> {
        let format = ConfigFormat::from_extension(path).ok_or_else(|| {
            OcrDiffError::config_error(format!(
                "Unsupported config file extension: {:?}",
                path.extension()
            ))
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            OcrDiffError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::load_from_string(&content, format)
    }

    /// Load configuration from a string with specified format
    pub fn load_from_string(content: &str, format: ConfigFormat) -> DiffResult<OcrDiffConfig> {
        match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
                OcrDiffError::config_error(format!("Failed to parse TOML config: {e}"))
            }),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
                OcrDiffError::config_error(format!("Failed to parse JSON config: {e}"))
            }),
        }
    }

    /// Save configuration to a file, auto-detecting the format from the extension
    pub fn save_to_file(config: &OcrDiffConfig, path: &Path) -> DiffResult<()> {
        let format = ConfigFormat::from_extension(path).ok_or_else(|| {
            OcrDiffError::config_error(format!(
                "Unsupported config file extension: {:?}",
                path.extension()
            ))
        })?;

        let content = Self::save_to_string(config, format)?;

        std::fs::write(path, content).map_err(|e| {
            OcrDiffError::config_error(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Save configuration to string with specified format
    pub fn save_to_string(config: &OcrDiffConfig, format: ConfigFormat) -> DiffResult<String> {
        match format {
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| {
                OcrDiffError::config_error(format!("Failed to serialize config to TOML: {e}"))
            }),
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                OcrDiffError::config_error(format!("Failed to serialize config to JSON: {e}"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OcrDiffConfig::default();
        assert_eq!(config.language.as_str(), "spa");
        assert!(config.parallel_extraction);
    }

    #[test]
    fn test_config_format_detection() {
        assert!(matches!(
            ConfigFormat::from_extension(Path::new("config.toml")),
            Some(ConfigFormat::Toml)
        ));
        assert!(matches!(
            ConfigFormat::from_extension(Path::new("config.json")),
            Some(ConfigFormat::Json)
        ));
        assert!(ConfigFormat::from_extension(Path::new("config.txt")).is_none());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = ConfigLoader::load_from_string("", ConfigFormat::Toml).unwrap();
        assert_eq!(config.language.as_str(), "spa");
        assert!(config.parallel_extraction);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = OcrDiffConfig {
            language: LanguageCode::new("eng"),
            parallel_extraction: false,
        };

        let toml_str = ConfigLoader::save_to_string(&config, ConfigFormat::Toml).unwrap();
        let loaded = ConfigLoader::load_from_string(&toml_str, ConfigFormat::Toml).unwrap();
        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.parallel_extraction, config.parallel_extraction);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = OcrDiffConfig::default();
        let json_str = ConfigLoader::save_to_string(&config, ConfigFormat::Json).unwrap();
        let loaded = ConfigLoader::load_from_string(&json_str, ConfigFormat::Json).unwrap();
        assert_eq!(loaded.language, config.language);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");

        let config = OcrDiffConfig {
            language: LanguageCode::new("deu"),
            parallel_extraction: false,
        };
        ConfigLoader::save_to_file(&config, &path).unwrap();
        let loaded = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(loaded.language.as_str(), "deu");
        assert!(!loaded.parallel_extraction);
    }
}
