//! Data types owned by the document store: chunks, retrieval results and
//! load statistics.

use serde::Serialize;

/// Bounded-length span of document text tied to exactly one source label.
///
/// Immutable once created; only the store constructs chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    text: String,
    source: String,
}

impl Chunk {
    pub(crate) fn new(text: String, source: String) -> Self {
        Self { text, source }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source label, e.g. `Document: panduan.pdf`.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Result of a relevance lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelevantContext {
    /// Selected chunks joined with `\n`; empty when nothing overlapped.
    pub context: String,
    /// Distinct source labels of the selected chunks.
    pub sources: Vec<String>,
}

impl RelevantContext {
    /// True when no chunk scored above zero.
    pub fn is_empty(&self) -> bool {
        self.context.trim().is_empty()
    }
}

/// Summary of a directory load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    /// File names that produced chunks.
    pub loaded: Vec<String>,
    /// `(file name, reason)` for files that failed to load.
    pub failed: Vec<(String, String)>,
    /// Total chunks appended.
    pub chunks: usize,
}
