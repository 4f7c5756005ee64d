//! Configuration file loading and parsing.

use crate::chunker::{DEFAULT_STRIDE, DEFAULT_WINDOW};
use crate::errors::Error;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration loaded from TOML file.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub store_path: PathBuf,

    #[serde(default = "default_chunk_window")]
    pub chunk_window: usize,

    #[serde(default = "default_chunk_stride")]
    pub chunk_stride: usize,

    #[serde(default = "default_recall_limit")]
    pub recall_limit: usize,

    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

fn default_chunk_window() -> usize {
    DEFAULT_WINDOW
}

fn default_chunk_stride() -> usize {
    DEFAULT_STRIDE
}

fn default_recall_limit() -> usize {
    3
}

fn default_preview_length() -> usize {
    100
}

/// Load configuration from TOML file.
pub fn load_from_file() -> Result<Option<ConfigFile>, Error> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let config_dir = dirs::config_dir().unwrap_or_else(|| home.join(".config"));

    let config_path = config_dir.join("muisti/config.toml");

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {e}",
                config_path.display()
            ))
        })?;

        let config: ConfigFile = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {e}",
                config_path.display()
            ))
        })?;

        Ok(Some(config))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_toml() {
        let content = r#"
This is not valid TOML
 [[unclosed bracket
 "#;

        let result: Result<ConfigFile, _> = toml::from_str(content);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_file() {
        let content = "";

        let result: Result<ConfigFile, _> = toml::from_str(content);
        assert!(result.is_ok());

        let config = result.unwrap();
        assert!(config.store_path.as_os_str().is_empty());
        assert_eq!(config.chunk_window, 500);
        assert_eq!(config.chunk_stride, 400);
    }

    #[test]
    fn test_config_file_missing_numeric_fields_use_defaults() {
        // Missing fields must not fall back to usize::default() (0)
        let content = r#"
            store_path = "/data/store"
        "#;

        let config: ConfigFile = toml::from_str(content).unwrap();

        assert_eq!(config.store_path, PathBuf::from("/data/store"));
        assert_eq!(config.chunk_window, 500);
        assert_eq!(config.chunk_stride, 400);
        assert_eq!(config.recall_limit, 3);
        assert_eq!(config.preview_length, 100);
    }

    #[test]
    fn test_config_file_partial_toml() {
        let content = r#"
            chunk_window = 800
            chunk_stride = 600
        "#;

        let config: ConfigFile = toml::from_str(content).unwrap();

        assert_eq!(config.chunk_window, 800);
        assert_eq!(config.chunk_stride, 600);
        assert_eq!(config.recall_limit, 3);
    }

    #[test]
    fn test_config_file_rejects_negative_numbers() {
        let content = r#"
            chunk_window = -500
        "#;

        let result: Result<ConfigFile, _> = toml::from_str(content);
        assert!(result.is_err());
    }
}
