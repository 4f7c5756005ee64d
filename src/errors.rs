//! Error types for muisti.

use thiserror::Error;

/// Main error type for muisti operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking parameters rejected.
    #[error("Invalid chunking: {0}")]
    InvalidChunking(String),

    /// Recall limit rejected.
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Engine failed to persist a chunk.
    #[error("Store error: {0}")]
    Store(String),

    /// Engine failed to answer a query.
    #[error("Recall error: {0}")]
    Recall(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
