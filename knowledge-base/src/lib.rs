//! Public API:
//! - `DocumentStore::load` / `load_dir`: extract text (PDF, DOCX, plain text), chunk it, label it.
//! - `DocumentStore::find_relevant_context`: word-set overlap ranking, top-N chunks + sources.

pub mod chunking;
pub mod document_store;
pub mod errors;
pub mod loaders;
pub mod scorer;
pub mod structs;

pub use document_store::{DEFAULT_MAX_CHUNKS, DocumentStore};
pub use errors::knowledge_base_error::KnowledgeBaseError;
pub use structs::chunk::{Chunk, LoadReport, RelevantContext};
