use thiserror::Error;

use crate::catalog::Section;

/// Errors from misusing the session or catalog API.
///
/// Tracing itself never fails: missed starts, abandoned strokes and failed
/// checks are reported as [`TraceEvent`](super::types::TraceEvent)s instead.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("unknown section `{0}` (expected letters, numbers or words)")]
    UnknownSection(String),

    #[error("item {index} is out of range for {section} ({len} items)")]
    ItemOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("section {0} has no items")]
    EmptySection(Section),

    #[error("invalid catalog manifest: {0}")]
    InvalidManifest(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
