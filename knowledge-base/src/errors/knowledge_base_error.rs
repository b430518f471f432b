//! Unified error type for the knowledge-base crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading documents into the store.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    // ── I/O & filesystem ────────────────────────────────────────────────────
    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension has no loader.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    // ── Extraction ──────────────────────────────────────────────────────────
    /// PDF text extraction failed.
    #[error("pdf extraction failed for {}: {reason}", path.display())]
    Pdf { path: PathBuf, reason: String },

    /// DOCX container or XML body could not be read.
    #[error("docx extraction failed for {}: {reason}", path.display())]
    Docx { path: PathBuf, reason: String },
}
