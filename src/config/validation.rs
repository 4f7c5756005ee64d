//! Configuration validation logic.

use crate::errors::Error;
use crate::present::MAX_RECALL_LIMIT;
use std::path::PathBuf;

/// Validates configuration values.
pub struct ConfigValidator {
    /// Path to the engine store.
    pub store_path: PathBuf,
    /// Chunk window in characters.
    pub chunk_window: usize,
    /// Chunk stride in characters.
    pub chunk_stride: usize,
    /// Default recall result limit.
    pub recall_limit: usize,
    /// Display preview length in characters.
    pub preview_length: usize,
}

impl ConfigValidator {
    /// Validate all configuration values for correctness and constraints.
    ///
    /// Checks that:
    /// - Store path is not empty
    /// - Chunk window and stride are positive, with stride at most the window
    /// - Recall limit is between 1 and `MAX_RECALL_LIMIT`
    /// - Preview length is positive
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any validation check fails.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_store_path()?;
        self.validate_chunking()?;
        self.validate_recall_limit()?;
        self.validate_preview_length()?;

        Ok(())
    }

    fn validate_store_path(&self) -> Result<(), Error> {
        if self.store_path.as_os_str().is_empty() {
            return Err(Error::Config("Store path cannot be empty".to_string()));
        }

        Ok(())
    }

    fn validate_chunking(&self) -> Result<(), Error> {
        if self.chunk_window == 0 {
            return Err(Error::Config(
                "Invalid chunk_window: must be greater than 0".to_string(),
            ));
        }

        if self.chunk_stride == 0 {
            return Err(Error::Config(
                "Invalid chunk_stride: must be greater than 0".to_string(),
            ));
        }

        if self.chunk_stride > self.chunk_window {
            return Err(Error::Config(format!(
                "Invalid chunk_stride: {} exceeds chunk_window {}",
                self.chunk_stride, self.chunk_window
            )));
        }

        Ok(())
    }

    fn validate_recall_limit(&self) -> Result<(), Error> {
        if self.recall_limit == 0 {
            return Err(Error::Config(
                "Invalid recall_limit: must be greater than 0".to_string(),
            ));
        }

        if self.recall_limit > MAX_RECALL_LIMIT {
            return Err(Error::Config(format!(
                "Invalid recall_limit: {} exceeds maximum allowed {}",
                self.recall_limit, MAX_RECALL_LIMIT
            )));
        }

        Ok(())
    }

    fn validate_preview_length(&self) -> Result<(), Error> {
        if self.preview_length == 0 {
            return Err(Error::Config(
                "Invalid preview_length: must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
