//! muisti - chunked document ingestion and retrieval presentation.
//!
//! This crate layers document ingestion and result presentation over a
//! memory engine reached through the [`Engine`] trait. Documents are split
//! into fixed-window overlapping character chunks, stored with source and
//! position metadata, and recalled as ready-to-print display lines.
//! All operations are synchronous (no async/await required).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use muisti::{ChunkPolicy, Document, LexicalEngine, RecallOptions, RecallOutcome};
//!
//! let mut engine =
//!     LexicalEngine::open(Path::new("./muisti_store")).expect("Failed to open store");
//!
//! // Chunk and store a document
//! let policy = ChunkPolicy::default();
//! let doc = Document::new(
//!     "Algorithm Docs",
//!     "Layered graphs keep nearest-neighbor hops short.",
//! );
//! let stored = muisti::ingest(&doc, &mut engine, &policy).expect("Failed to ingest");
//! println!("stored {} chunks", stored);
//!
//! // Recall and print display lines
//! match muisti::recall("how do the graphs work", &mut engine, &RecallOptions::default()) {
//!     Ok(RecallOutcome::Matches(memories)) => {
//!         for memory in memories {
//!             println!("{}", memory.display);
//!         }
//!     }
//!     Ok(RecallOutcome::NoMatches) => println!("No matching memories found."),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

pub mod chunker;
pub mod config;
pub mod engine;
pub mod errors;
pub mod ingest;
pub mod lexical;
pub mod present;

// Re-export public API
pub use chunker::{Chunk, ChunkPolicy};
pub use config::Config;
pub use engine::{Engine, META_CHUNK_ID, META_SOURCE, Metadata, RetrievalResult};
pub use errors::Error;
pub use ingest::{Document, IngestReport, ingest, ingest_all};
pub use lexical::LexicalEngine;
pub use present::{
    MAX_RECALL_LIMIT, RecallOptions, RecallOutcome, RecalledMemory, format_display_line, recall,
};
