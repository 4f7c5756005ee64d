//! A small token-overlap engine backed by an append-only record file.
//!
//! `LexicalEngine` exists so the demo binary and tests have a working
//! collaborator without pulling in an index or embedding model. It ranks by
//! case-insensitive token overlap with the query and persists records as one
//! JSON line each, replayed at open. It is a stand-in for a real engine, not
//! a search index.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::{Engine, Metadata, RetrievalResult};
use crate::errors::Error;

/// One persisted record, one JSON line in the store file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    content: String,
    metadata: Metadata,
}

/// File-backed engine ranking by shared query tokens.
pub struct LexicalEngine {
    path: PathBuf,
    records: Vec<StoredRecord>,
}

impl LexicalEngine {
    /// Open or create an engine store at the given path.
    ///
    /// Missing parent directories are created. An existing store file is
    /// replayed into memory; lines that fail to parse are skipped with a
    /// warning on stderr so one corrupted record cannot take down the store.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the parent directories cannot be created or
    /// an existing store file cannot be read.
    pub fn open(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut records = Vec::new();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<StoredRecord>(line) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        eprintln!(
                            "Warning: skipping corrupted record in {}: {}",
                            path.display(),
                            e
                        );
                    }
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn append_to_file(&self, record: &StoredRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Store(format!("cannot open {}: {}", self.path.display(), e)))?;
        writeln!(file, "{}", line)
            .map_err(|e| Error::Store(format!("cannot append to {}: {}", self.path.display(), e)))
    }
}

/// Lowercased alphanumeric tokens of a text.
fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl Engine for LexicalEngine {
    fn store(&mut self, content: &str, metadata: Metadata) -> Result<(), Error> {
        let record = StoredRecord {
            content: content.to_string(),
            metadata,
        };
        self.append_to_file(&record)?;
        self.records.push(record);
        Ok(())
    }

    fn recall(&mut self, query: &str, limit: usize) -> Result<Vec<RetrievalResult>, Error> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Ok(vec![]);
        }

        let mut scored: Vec<(usize, &StoredRecord)> = self
            .records
            .iter()
            .filter_map(|record| {
                let overlap = tokenize(&record.content)
                    .intersection(&query_tokens)
                    .count();
                if overlap > 0 {
                    Some((overlap, record))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, record)| RetrievalResult {
                content: record.content.clone(),
                metadata: record.metadata.clone(),
            })
            .collect())
    }
}
