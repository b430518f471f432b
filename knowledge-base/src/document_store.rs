//! Append-only store of document chunks with lexical-overlap lookup.
//!
//! Written at startup, read-only while serving requests: share it behind an
//! `Arc` once loading is done.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    chunking::{DEFAULT_CHUNK_SIZE, chunk_text},
    errors::knowledge_base_error::KnowledgeBaseError,
    loaders::{DocumentKind, extract_text},
    scorer::rank,
    structs::chunk::{Chunk, LoadReport, RelevantContext},
};

/// Default number of chunks returned by [`DocumentStore::find_relevant_context`].
pub const DEFAULT_MAX_CHUNKS: usize = 2;

#[derive(Debug, Clone)]
pub struct DocumentStore {
    chunks: Vec<Chunk>,
    chunk_size: usize,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl DocumentStore {
    /// Empty store whose chunks are bounded by `chunk_size` characters.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunks: Vec::new(),
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Loads one document, labels its chunks `Document: <filename>` and returns
    /// how many chunks were appended.
    ///
    /// # Errors
    /// Propagates extraction errors; the store is unchanged on failure.
    pub fn load(&mut self, path: &Path) -> Result<usize, KnowledgeBaseError> {
        let text = extract_text(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let added = self.add_document(&name, &text);
        info!(document = %name, chunks = added, "document loaded");
        Ok(added)
    }

    /// Loads every supported file directly inside `dir`, in file-name order.
    ///
    /// Unsupported files are skipped; a file that fails to extract is recorded
    /// in the report and loading continues.
    ///
    /// # Errors
    /// Returns [`KnowledgeBaseError::Io`] only if the directory itself cannot be read.
    pub fn load_dir(&mut self, dir: &Path) -> Result<LoadReport, KnowledgeBaseError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut report = LoadReport::default();
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if DocumentKind::from_path(&path).is_none() {
                debug!(file = %name, "skipping unsupported file");
                continue;
            }

            match self.load(&path) {
                Ok(n) => {
                    report.chunks += n;
                    report.loaded.push(name);
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "failed to load document");
                    report.failed.push((name, e.to_string()));
                }
            }
        }

        info!(
            dir = %dir.display(),
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            chunks = report.chunks,
            "knowledge directory loaded"
        );
        Ok(report)
    }

    /// Chunks `text` and appends each chunk with the label `Document: <name>`.
    pub fn add_document(&mut self, name: &str, text: &str) -> usize {
        let source = format!("Document: {name}");
        let pieces = chunk_text(text, self.chunk_size);
        let added = pieces.len();
        self.chunks
            .extend(pieces.into_iter().map(|p| Chunk::new(p, source.clone())));
        added
    }

    /// Top `max_chunks` chunks by word-set overlap with `query`.
    ///
    /// Chunks with zero overlap are never returned. The selected texts are
    /// joined with `\n`; sources are the distinct labels of those chunks.
    pub fn find_relevant_context(&self, query: &str, max_chunks: usize) -> RelevantContext {
        let ranked = rank(query, &self.chunks, max_chunks);

        let mut texts = Vec::with_capacity(ranked.len());
        let mut sources: Vec<String> = Vec::new();
        for (_, chunk) in &ranked {
            texts.push(chunk.text());
            if !sources.iter().any(|s| s == chunk.source()) {
                sources.push(chunk.source().to_string());
            }
        }

        debug!(
            query_len = query.len(),
            matched = ranked.len(),
            top_score = ranked.first().map(|(s, _)| *s).unwrap_or(0),
            "find_relevant_context"
        );

        RelevantContext {
            context: texts.join("\n"),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chunk_carries_its_document_label() {
        let mut store = DocumentStore::new(12);
        let n = store.add_document("gizi.txt", "protein sayur buah susu ikan telur");
        assert!(n > 1);
        assert_eq!(store.len(), n);
        assert!(store.chunks().iter().all(|c| c.source() == "Document: gizi.txt"));
    }

    #[test]
    fn zero_overlap_returns_empty_context_and_sources() {
        let mut store = DocumentStore::default();
        store.add_document("a.txt", "tekanan darah tinggi saat hamil");
        let ctx = store.find_relevant_context("olahraga yoga", DEFAULT_MAX_CHUNKS);
        assert!(ctx.is_empty());
        assert_eq!(ctx.context, "");
        assert!(ctx.sources.is_empty());
    }

    #[test]
    fn sources_are_distinct() {
        let mut store = DocumentStore::new(10);
        store.add_document("a.txt", "mual pagi mual sore");
        let ctx = store.find_relevant_context("mual", 2);
        assert_eq!(ctx.context.lines().count(), 2);
        assert_eq!(ctx.sources, vec!["Document: a.txt".to_string()]);
    }

    #[test]
    fn top_chunks_are_joined_with_newlines() {
        let mut store = DocumentStore::default();
        store.add_document("a.txt", "anemia zat besi");
        store.add_document("b.txt", "anemia pada kehamilan zat besi asam folat");
        store.add_document("c.txt", "olahraga ringan");

        let ctx = store.find_relevant_context("anemia zat besi folat", 2);
        assert_eq!(
            ctx.context,
            "anemia pada kehamilan zat besi asam folat\nanemia zat besi"
        );
        assert_eq!(ctx.sources.len(), 2);
        assert!(ctx.sources.contains(&"Document: a.txt".to_string()));
        assert!(ctx.sources.contains(&"Document: b.txt".to_string()));
    }
}
