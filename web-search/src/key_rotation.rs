use std::sync::atomic::{AtomicUsize, Ordering};

/// Round-robin cursor over a fixed list of API keys.
///
/// The cursor is atomic, so concurrent requests each get a distinct step
/// without skipping or repeating positions.
#[derive(Debug)]
pub struct KeyRotation {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyRotation {
    /// Blank keys are dropped.
    pub fn new(keys: Vec<String>) -> Self {
        let keys = keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        Self {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key for this call; advances the cursor by one and wraps at the end.
    pub fn next_key(&self) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        Some(&self.keys[idx])
    }
}
