//! Environment variable overrides for configuration.

use crate::errors::Error;
use std::path::PathBuf;

use super::paths;

#[cfg(test)]
use super::tests_utils::ENV_MUTEX;

/// Parse environment variable as a path, expanding tilde.
fn parse_env_path(name: &str, value: &str) -> Result<PathBuf, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    Ok(paths::expand_tilde_path(&PathBuf::from(value)))
}

/// Parse environment variable as a usize.
fn parse_env_usize(name: &str, value: &str) -> Result<usize, Error> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{name} cannot be empty")));
    }
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {name} value: {e}")))
}

/// Apply environment variable overrides to configuration.
pub fn apply_env_overrides(
    store_path: &mut PathBuf,
    chunk_window: &mut usize,
    chunk_stride: &mut usize,
    recall_limit: &mut usize,
    preview_length: &mut usize,
) -> Result<(), Error> {
    if let Ok(val) = std::env::var("MUISTI_STORE_PATH") {
        *store_path = parse_env_path("MUISTI_STORE_PATH", &val)?;
    }
    if let Ok(val) = std::env::var("MUISTI_CHUNK_WINDOW") {
        *chunk_window = parse_env_usize("MUISTI_CHUNK_WINDOW", &val)?;
    }
    if let Ok(val) = std::env::var("MUISTI_CHUNK_STRIDE") {
        *chunk_stride = parse_env_usize("MUISTI_CHUNK_STRIDE", &val)?;
    }
    if let Ok(val) = std::env::var("MUISTI_RECALL_LIMIT") {
        *recall_limit = parse_env_usize("MUISTI_RECALL_LIMIT", &val)?;
    }
    if let Ok(val) = std::env::var("MUISTI_PREVIEW_LENGTH") {
        *preview_length = parse_env_usize("MUISTI_PREVIEW_LENGTH", &val)?;
    }
    Ok(())
}
