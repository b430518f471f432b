//! Greedy word chunker.
//!
//! Single pass, no overlap: words are accumulated into a running chunk and the
//! chunk is closed as soon as the next word would push its length (word
//! characters plus one separator per word) past the limit. Words are never
//! split, so a single word longer than the limit becomes its own chunk.

use tracing::trace;

/// Default chunk limit in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Split `text` on whitespace and pack the words into chunks of at most
/// `chunk_size` characters (joined by single spaces).
///
/// Lengths are counted in `char`s, not bytes.
///
/// # Example
/// ```
/// use knowledge_base::chunking::chunk_text;
///
/// let chunks = chunk_text("satu dua tiga empat", 9);
/// assert_eq!(chunks, vec!["satu dua", "tiga", "empat"]);
/// ```
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    // Word chars plus one separator per accumulated word.
    let mut current_size = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if !current.is_empty() && current_size + len > chunk_size {
            chunks.push(current.join(" "));
            current.clear();
            current_size = 0;
        }
        current.push(word);
        current_size += len + 1;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    trace!(chunks = chunks.len(), chunk_size, "chunk_text: done");
    chunks
}
