//! Bag-of-words relevance: the score of a chunk is the number of distinct
//! lowercase words it shares with the query. No weighting, no length
//! normalization.

use std::collections::HashSet;

use crate::structs::chunk::Chunk;

/// Lowercase, whitespace-split, deduplicated word set.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Size of the intersection between `query_words` and the words of `text`.
pub fn overlap_score(query_words: &HashSet<String>, text: &str) -> usize {
    tokenize(text).intersection(query_words).count()
}

/// Scores every chunk against `query`, drops zero scores, and returns the top
/// `max_chunks` by descending score. Ties keep insertion order.
pub fn rank<'a>(query: &str, chunks: &'a [Chunk], max_chunks: usize) -> Vec<(usize, &'a Chunk)> {
    let query_words = tokenize(query);
    if query_words.is_empty() || max_chunks == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &Chunk)> = chunks
        .iter()
        .map(|c| (overlap_score(&query_words, c.text()), c))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable sort: equal scores stay in insertion order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(max_chunks);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str) -> Chunk {
        Chunk::new(text.to_string(), "Document: t.txt".to_string())
    }

    #[test]
    fn tokenize_lowercases_and_dedups() {
        let t = tokenize("Mual MUAL mual\tpagi");
        assert_eq!(t.len(), 2);
        assert!(t.contains("mual"));
        assert!(t.contains("pagi"));
    }

    #[test]
    fn score_ignores_frequency() {
        let q = tokenize("mual pagi");
        assert_eq!(overlap_score(&q, "mual mual mual"), 1);
        assert_eq!(overlap_score(&q, "pagi ini mual"), 2);
    }

    #[test]
    fn score_ignores_chunk_length() {
        let chunks = vec![
            chunk("mual pagi"),
            chunk(&format!("{} mual pagi", "kata ".repeat(150))),
        ];
        let ranked = rank("mual pagi hari", &chunks, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, ranked[1].0);
        assert_eq!(ranked[0].1.text(), "mual pagi");
    }

    #[test]
    fn zero_scores_are_dropped() {
        let chunks = vec![chunk("vitamin"), chunk("tekanan darah")];
        let ranked = rank("tekanan", &chunks, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].1.text(), "tekanan darah");
    }

    #[test]
    fn higher_overlap_ranks_first() {
        let chunks = vec![chunk("a b"), chunk("a b c"), chunk("a")];
        let ranked = rank("a b c", &chunks, 2);
        let texts: Vec<_> = ranked.iter().map(|(_, c)| c.text()).collect();
        assert_eq!(texts, vec!["a b c", "a b"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let chunks = vec![chunk("a b")];
        assert!(rank("   ", &chunks, 2).is_empty());
    }
}
