//! A compressed prefix tree (radix tree) mapping byte-string keys to values.
//!
//! Each edge carries a non-empty label and the key of a node is the
//! concatenation of the labels on the path from the root.  Insertion splits
//! edges where a new key diverges from an existing label, and removal merges
//! away intermediate nodes left with a single child, so the tree stays
//! minimal under any sequence of operations.
//!
//! ```
//! use radix_trie::{Trie, TrieConfig};
//!
//! let mut t = Trie::with_config(TrieConfig::new().sorted(true));
//! t.insert(b"home", b"home-value".to_vec());
//! t.insert(b"homework", b"homework-value".to_vec());
//!
//! assert_eq!(t.keys(b"hom"), vec![b"home".to_vec(), b"homework".to_vec()]);
//!
//! t.remove(b"home");
//! assert!(t.contains(b"homework"));
//! assert!(t.get(b"home").is_err());
//! ```
//!
//! The trie is not synchronized.  Share it across threads behind a lock.

mod config;
mod error;
mod insert;
mod iter;
mod node;
mod remove;
mod traverse;
mod trie;


pub use config::TrieConfig;
pub use error::{Error, Result};
pub use iter::Iter;
pub use traverse::Visit;
pub use trie::Trie;
