//! Error types for trie operations.

use thiserror::Error;

/// Error type for trie operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not stored in the trie.  Keys that only name an
    /// intermediate node, or that end partway along an edge, are not stored.
    #[error("key not found: {:?}", String::from_utf8_lossy(.key))]
    NotFound { key: Vec<u8> },
}

impl Error {
    pub(crate) fn not_found(key: &[u8]) -> Self {
        Error::NotFound { key: key.to_vec() }
    }
}

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, Error>;
