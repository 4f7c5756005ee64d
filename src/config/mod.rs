//! Configuration system for muisti.

mod loader;
mod overrides;
mod paths;
mod validation;

#[cfg(test)]
mod tests_utils;
#[cfg(test)]
use tests_utils::ENV_MUTEX;

use crate::chunker::{ChunkPolicy, DEFAULT_STRIDE, DEFAULT_WINDOW};
use crate::errors::Error;
use crate::present::RecallOptions;
use serde::Deserialize;
use std::path::PathBuf;

pub use loader::ConfigFile;

/// Configuration values with priority: defaults < config file < env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the engine store.
    #[serde(default)]
    pub store_path: PathBuf,

    /// Chunk window in characters.
    #[serde(default)]
    pub chunk_window: usize,

    /// Chunk stride in characters.
    #[serde(default)]
    pub chunk_stride: usize,

    /// Default recall result limit.
    #[serde(default)]
    pub recall_limit: usize,

    /// Display preview length in characters.
    #[serde(default)]
    pub preview_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        // Use home directory with sensible fallback for systems without HOME
        let home = dirs::home_dir().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
        });
        let muisti_dir = home.join(".muisti");

        Self {
            store_path: muisti_dir.join("store"),
            chunk_window: DEFAULT_WINDOW,
            chunk_stride: DEFAULT_STRIDE,
            recall_limit: 3,
            preview_length: 100,
        }
    }
}

impl Config {
    /// Load configuration with defaults, file values, and environment overrides.
    pub fn load() -> Result<Self, Error> {
        let file_config = loader::load_from_file()?;

        let mut config = Config::default();

        if let Some(mut file) = file_config {
            file.store_path = paths::expand_tilde_path(&file.store_path);
            config.merge_from_file(file);
        }

        overrides::apply_env_overrides(
            &mut config.store_path,
            &mut config.chunk_window,
            &mut config.chunk_stride,
            &mut config.recall_limit,
            &mut config.preview_length,
        )?;

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration from a file into this config.
    fn merge_from_file(&mut self, file: ConfigFile) {
        if !file.store_path.as_os_str().is_empty() {
            self.store_path = file.store_path;
        }
        self.chunk_window = file.chunk_window;
        self.chunk_stride = file.chunk_stride;
        self.recall_limit = file.recall_limit;
        self.preview_length = file.preview_length;
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), Error> {
        let validator = validation::ConfigValidator {
            store_path: self.store_path.clone(),
            chunk_window: self.chunk_window,
            chunk_stride: self.chunk_stride,
            recall_limit: self.recall_limit,
            preview_length: self.preview_length,
        };

        validator.validate()
    }

    /// Chunking policy from the configured window and stride.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidChunking` for values the policy rejects.
    pub fn chunk_policy(&self) -> Result<ChunkPolicy, Error> {
        ChunkPolicy::new(self.chunk_window, self.chunk_stride)
    }

    /// Recall options from the configured limit and preview length.
    pub fn recall_options(&self) -> RecallOptions {
        RecallOptions {
            limit: self.recall_limit,
            preview_length: self.preview_length,
        }
    }
}
