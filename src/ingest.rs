//! Document ingestion: chunk, tag, and store.

use serde::Serialize;

use crate::chunker::ChunkPolicy;
use crate::engine::{Engine, META_CHUNK_ID, META_SOURCE, Metadata};
use crate::errors::Error;

/// A named document to ingest.
#[derive(Debug, Clone)]
pub struct Document {
    /// Source label stored with every chunk.
    pub name: String,
    /// Full document text.
    pub text: String,
}

impl Document {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
        }
    }
}

/// Ingestion totals for reporting.
#[derive(Debug, Default, Clone, Serialize)]
pub struct IngestReport {
    pub documents: usize,
    pub chunks: usize,
}

/// Ingest one document into the engine.
///
/// The document text is chunked with `policy`, and each chunk is stored with
/// metadata tagging its source document and 0-based chunk index. Chunks are
/// stored in emission order; the first store failure aborts the ingest, and
/// chunks stored before the failure are not rolled back.
///
/// # Arguments
///
/// * `document` - Named document to chunk and store
/// * `engine` - Engine that persists the chunks
/// * `policy` - Window/stride chunking parameters
///
/// # Returns
///
/// The number of chunks stored. An empty document stores nothing and
/// returns 0.
///
/// # Errors
///
/// Returns the engine's error if any chunk fails to store.
pub fn ingest(
    document: &Document,
    engine: &mut dyn Engine,
    policy: &ChunkPolicy,
) -> Result<usize, Error> {
    let chunks = policy.chunk(&document.text);

    for chunk in &chunks {
        let mut metadata = Metadata::new();
        metadata.insert(META_SOURCE.to_string(), document.name.clone());
        metadata.insert(META_CHUNK_ID.to_string(), chunk.index.to_string());
        engine.store(&chunk.text, metadata)?;
    }

    Ok(chunks.len())
}

/// Ingest a batch of documents in order.
///
/// Documents ingested before a failure stay stored; the failing document may
/// be partially stored, and later documents are not attempted.
///
/// # Errors
///
/// Returns the first error from [`ingest`].
pub fn ingest_all(
    documents: &[Document],
    engine: &mut dyn Engine,
    policy: &ChunkPolicy,
) -> Result<IngestReport, Error> {
    let mut report = IngestReport::default();

    for document in documents {
        report.chunks += ingest(document, engine, policy)?;
        report.documents += 1;
    }

    Ok(report)
}
