/// Per-instance settings for a [`Trie`](crate::Trie).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieConfig {
    /// Visit children in ascending order of their edge's first byte during
    /// traversal and enumeration.  When unset the order is unspecified.
    pub sorted: bool,
}

impl TrieConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}
