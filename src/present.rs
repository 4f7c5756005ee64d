//! Recall presentation: query the engine and render display lines.

use serde::Serialize;

use crate::engine::{Engine, META_SOURCE, Metadata, RetrievalResult};
use crate::errors::Error;

/// Maximum allowed limit for recall operations.
pub const MAX_RECALL_LIMIT: usize = 1_000;

/// Placeholder shown when a result carries no source metadata.
pub const SOURCE_PLACEHOLDER: &str = "unknown";

/// Recall parameters.
#[derive(Debug, Clone, Copy)]
pub struct RecallOptions {
    /// Maximum number of results to return (1 to `MAX_RECALL_LIMIT`).
    pub limit: usize,
    /// Preview length in characters for display lines.
    pub preview_length: usize,
}

impl Default for RecallOptions {
    fn default() -> Self {
        Self {
            limit: 3,
            preview_length: 100,
        }
    }
}

/// One recalled memory with its pre-rendered display line.
#[derive(Debug, Clone, Serialize)]
pub struct RecalledMemory {
    pub content: String,
    pub metadata: Metadata,
    /// `[source] preview...` line ready for printing.
    pub display: String,
}

/// Result of a recall: either ranked matches or an explicit empty outcome.
#[derive(Debug, Serialize)]
pub enum RecallOutcome {
    /// The engine returned no hits for the query.
    NoMatches,
    /// At least one hit, in the engine's ranking order.
    Matches(Vec<RecalledMemory>),
}

#[must_use = "handle the error or results may be lost"]
/// Recall memories for a query and prepare them for display.
///
/// The query goes to the engine as-is and the results come back in the
/// engine's ranking order; nothing is re-ranked, filtered, or deduplicated
/// here. At most `options.limit` results are returned even if the engine
/// overshoots.
///
/// # Arguments
///
/// * `query` - Query text, passed through to the engine
/// * `engine` - Engine that answers the query
/// * `options` - Result limit and preview length
///
/// # Returns
///
/// `RecallOutcome::NoMatches` when the engine returns nothing, otherwise
/// `RecallOutcome::Matches` with one entry per hit.
///
/// # Errors
///
/// Returns `Error::InvalidLimit` if `options.limit` is 0 or exceeds
/// `MAX_RECALL_LIMIT`, or the engine's error if the query fails.
pub fn recall(
    query: &str,
    engine: &mut dyn Engine,
    options: &RecallOptions,
) -> Result<RecallOutcome, Error> {
    validate_limit(options.limit)?;

    let mut results = engine.recall(query, options.limit)?;
    results.truncate(options.limit);

    if results.is_empty() {
        return Ok(RecallOutcome::NoMatches);
    }

    let memories = results
        .into_iter()
        .map(|result| {
            let display = format_display_line(&result, options.preview_length);
            RecalledMemory {
                content: result.content,
                metadata: result.metadata,
                display,
            }
        })
        .collect();

    Ok(RecallOutcome::Matches(memories))
}

/// Render one result as a `[source] preview...` line.
///
/// The preview is the first `preview_length` characters of the content, so
/// multi-byte text never splits mid-character. The trailing `...` is always
/// appended, even when the content is shorter than the preview. Results
/// without a source tag render with a placeholder.
///
/// # Example
///
/// ```
/// use muisti::engine::RetrievalResult;
/// use muisti::present::format_display_line;
///
/// let result = RetrievalResult {
///     content: "alpha beta gamma".to_string(),
///     metadata: Default::default(),
/// };
///
/// assert_eq!(format_display_line(&result, 5), "[unknown] alpha...");
/// ```
pub fn format_display_line(result: &RetrievalResult, preview_length: usize) -> String {
    let source = result
        .metadata
        .get(META_SOURCE)
        .map(String::as_str)
        .unwrap_or(SOURCE_PLACEHOLDER);

    let preview: String = result.content.chars().take(preview_length).collect();

    format!("[{}] {}...", source, preview)
}

/// Validate recall limit to prevent unbounded engine queries.
fn validate_limit(limit: usize) -> Result<(), Error> {
    if limit == 0 {
        return Err(Error::InvalidLimit(
            "Limit must be greater than 0".to_string(),
        ));
    }
    if limit > MAX_RECALL_LIMIT {
        return Err(Error::InvalidLimit(format!(
            "Limit {} exceeds maximum allowed {}",
            limit, MAX_RECALL_LIMIT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{META_CHUNK_ID, Metadata};

    /// Engine double that returns canned results and records the call.
    struct CannedEngine {
        results: Vec<RetrievalResult>,
        last_query: Option<String>,
        last_limit: Option<usize>,
    }

    impl CannedEngine {
        fn with_results(results: Vec<RetrievalResult>) -> Self {
            Self {
                results,
                last_query: None,
                last_limit: None,
            }
        }
    }

    impl Engine for CannedEngine {
        fn store(&mut self, _content: &str, _metadata: Metadata) -> Result<(), Error> {
            Ok(())
        }

        fn recall(&mut self, query: &str, limit: usize) -> Result<Vec<RetrievalResult>, Error> {
            self.last_query = Some(query.to_string());
            self.last_limit = Some(limit);
            Ok(self.results.clone())
        }
    }

    fn canned_result(source: Option<&str>, content: &str) -> RetrievalResult {
        let mut metadata = Metadata::new();
        if let Some(name) = source {
            metadata.insert(META_SOURCE.to_string(), name.to_string());
        }
        metadata.insert(META_CHUNK_ID.to_string(), "0".to_string());
        RetrievalResult {
            content: content.to_string(),
            metadata,
        }
    }

    #[test]
    fn test_recall_zero_limit_rejected() {
        let mut engine = CannedEngine::with_results(vec![]);
        let options = RecallOptions {
            limit: 0,
            preview_length: 100,
        };

        let result = recall("query", &mut engine, &options);

        assert!(matches!(result, Err(Error::InvalidLimit(_))));
        // Rejected before the engine is ever asked
        assert!(engine.last_query.is_none());
    }

    #[test]
    fn test_recall_limit_over_max_rejected() {
        let mut engine = CannedEngine::with_results(vec![]);
        let options = RecallOptions {
            limit: MAX_RECALL_LIMIT + 1,
            preview_length: 100,
        };

        let result = recall("query", &mut engine, &options);

        match result {
            Err(Error::InvalidLimit(msg)) => assert!(msg.contains("exceeds maximum allowed")),
            other => panic!("Expected InvalidLimit, got {:?}", other),
        }
    }

    #[test]
    fn test_recall_no_results_is_distinct_outcome() {
        let mut engine = CannedEngine::with_results(vec![]);

        let outcome = recall("nothing here", &mut engine, &RecallOptions::default()).unwrap();

        assert!(matches!(outcome, RecallOutcome::NoMatches));
    }

    #[test]
    fn test_recall_passes_query_and_limit_to_engine() {
        let mut engine = CannedEngine::with_results(vec![canned_result(Some("doc"), "text")]);

        recall("find me", &mut engine, &RecallOptions::default()).unwrap();

        assert_eq!(engine.last_query.as_deref(), Some("find me"));
        assert_eq!(engine.last_limit, Some(3));
    }

    #[test]
    fn test_recall_preserves_engine_order() {
        let mut engine = CannedEngine::with_results(vec![
            canned_result(Some("a"), "first"),
            canned_result(Some("b"), "second"),
            canned_result(Some("c"), "third"),
        ]);

        let outcome = recall("q", &mut engine, &RecallOptions::default()).unwrap();

        let memories = match outcome {
            RecallOutcome::Matches(memories) => memories,
            RecallOutcome::NoMatches => panic!("Expected matches"),
        };
        let contents: Vec<&str> = memories.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_recall_truncates_overshooting_engine() {
        let results: Vec<RetrievalResult> = (0..5)
            .map(|i| canned_result(Some("doc"), &format!("result {}", i)))
            .collect();
        let mut engine = CannedEngine::with_results(results);

        let outcome = recall("q", &mut engine, &RecallOptions::default()).unwrap();

        match outcome {
            RecallOutcome::Matches(memories) => assert_eq!(memories.len(), 3),
            RecallOutcome::NoMatches => panic!("Expected matches"),
        }
    }

    #[test]
    fn test_recall_renders_display_lines() {
        let mut engine = CannedEngine::with_results(vec![canned_result(
            Some("Algorithm Docs"),
            "The index is built in layers.",
        )]);

        let outcome = recall("layers", &mut engine, &RecallOptions::default()).unwrap();

        match outcome {
            RecallOutcome::Matches(memories) => {
                assert_eq!(
                    memories[0].display,
                    "[Algorithm Docs] The index is built in layers...."
                );
            }
            RecallOutcome::NoMatches => panic!("Expected matches"),
        }
    }

    #[test]
    fn test_format_display_line_truncates_to_preview_length() {
        let result = canned_result(Some("long"), &"a".repeat(250));

        let line = format_display_line(&result, 100);

        assert_eq!(line, format!("[long] {}...", "a".repeat(100)));
    }

    #[test]
    fn test_format_display_line_short_content_kept_whole() {
        let result = canned_result(Some("short"), "only fifty characters or so");

        let line = format_display_line(&result, 100);

        assert_eq!(line, "[short] only fifty characters or so...");
    }

    #[test]
    fn test_format_display_line_missing_source_uses_placeholder() {
        let result = canned_result(None, "orphaned content");

        let line = format_display_line(&result, 100);

        assert_eq!(line, "[unknown] orphaned content...");
    }

    #[test]
    fn test_format_display_line_multibyte_preview() {
        let result = canned_result(Some("jp"), "ありがとうございました");

        let line = format_display_line(&result, 4);

        assert_eq!(line, "[jp] ありがと...");
    }

    #[test]
    fn test_recall_options_default() {
        let options = RecallOptions::default();
        assert_eq!(options.limit, 3);
        assert_eq!(options.preview_length, 100);
    }
}
