//! The engine seam: the trait muisti layers on top of.
//!
//! An engine owns indexing, ranking, and persistence. muisti only asks it to
//! store tagged chunks and recall ranked results; everything the engine
//! returns passes through to the caller unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// String key/value metadata stored alongside each chunk.
pub type Metadata = HashMap<String, String>;

/// Metadata key for the source document name.
pub const META_SOURCE: &str = "source";
/// Metadata key for the chunk's position within its document.
pub const META_CHUNK_ID: &str = "chunk_id";

/// One recall hit, in the engine's ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// The stored chunk text.
    pub content: String,
    /// Metadata the chunk was stored with.
    pub metadata: Metadata,
}

/// A store/recall collaborator.
///
/// Both methods take `&mut self` so engines that mutate internal state while
/// embedding (tensor buffers, index caches) can implement the trait directly.
/// The trait is object-safe; callers typically hold a `&mut dyn Engine`.
pub trait Engine {
    /// Persist one chunk with its metadata.
    fn store(&mut self, content: &str, metadata: Metadata) -> Result<(), Error>;

    /// Return up to `limit` results for `query`, best first.
    fn recall(&mut self, query: &str, limit: usize) -> Result<Vec<RetrievalResult>, Error>;
}
