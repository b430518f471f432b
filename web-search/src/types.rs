use serde::{Deserialize, Serialize};

/// One organic search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    /// Snippet text.
    pub body: String,
    pub link: String,
}
