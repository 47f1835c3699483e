use std::fmt;
use std::io;
use std::iter::FromIterator;

use tracing::debug;

use crate::config::TrieConfig;
use crate::error::{Error, Result};
use crate::node::Node;

/// A radix tree mapping byte-string keys to values of type `T`.
pub struct Trie<T = Vec<u8>> {
    pub(crate) root: Node<T>,
    config: TrieConfig,
    len: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::empty(),
            config,
            len: 0,
        }
    }

    pub fn config(&self) -> TrieConfig {
        self.config
    }

    /// Sets whether traversal and enumeration visit children in ascending
    /// byte order.
    pub fn set_sorted(&mut self, sorted: bool) {
        self.config.sorted = sorted;
    }

    pub fn is_sorted(&self) -> bool {
        self.config.sorted
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = Node::empty();
        self.len = 0;
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.root.descend(key).map_or(false, Node::is_leaf)
    }

    pub fn get(&self, key: &[u8]) -> Result<&T> {
        self.root
            .descend(key)
            .and_then(|node| node.value.as_ref())
            .ok_or_else(|| Error::not_found(key))
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Result<&mut T> {
        self.root
            .descend_mut(key)
            .and_then(|node| node.value.as_mut())
            .ok_or_else(|| Error::not_found(key))
    }

    /// Replaces the value of an existing key, returning the old value.  Never
    /// adds a key.
    pub fn set(&mut self, key: &[u8], value: T) -> Result<T> {
        let slot = self.get_mut(key)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: &[u8], value: T) -> Option<T> {
        let old = self.root.insert(key, value);
        if old.is_none() {
            self.len += 1;
        } else {
            debug!(key_len = key.len(), "overwrote existing value");
        }
        old
    }

    /// Removes `key`, returning its value.  Absent keys leave the trie
    /// untouched.
    pub fn remove(&mut self, key: &[u8]) -> Option<T> {
        let removed = self.root.remove(key, true)?;
        self.len -= 1;
        Some(removed.value)
    }

    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.root.debug("", out)
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.root.check_invariants(true), self.len);
    }
}

impl<T: fmt::Debug> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (String::from_utf8_lossy(&k).into_owned(), v)))
            .finish()
    }
}

impl<K: AsRef<[u8]>, T> Extend<(K, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k.as_ref(), v);
        }
    }
}

impl<K: AsRef<[u8]>, T> FromIterator<(K, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut t = Trie::new();
        t.extend(iter);
        t
    }
}
