use crate::node::Node;
use crate::trie::Trie;

/// Depth-first iterator over `(key, value)` pairs.  Keys come out in
/// ascending order when the trie is sorted.
pub struct Iter<'a, T> {
    stack: Vec<(&'a Node<T>, Vec<u8>)>,
    sorted: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(start: Option<(&'a Node<T>, Vec<u8>)>, sorted: bool) -> Self {
        Self {
            stack: start.into_iter().collect(),
            sorted,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Vec<u8>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Push in reverse so the smallest child is popped first.
            for edge in node.children(self.sorted).into_iter().rev() {
                let mut child_key = Vec::with_capacity(key.len() + edge.label.len());
                child_key.extend_from_slice(&key);
                child_key.extend_from_slice(&edge.label);
                self.stack.push((&edge.next, child_key));
            }
            if let Some(value) = node.value.as_ref() {
                return Some((key, value));
            }
        }
        None
    }
}

impl<T> Trie<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(Some((&self.root, vec![])), self.is_sorted())
    }

    /// Iterates over every stored key starting with `prefix`.
    pub fn prefix_iter(&self, prefix: &[u8]) -> Iter<'_, T> {
        Iter::new(self.root.seek(prefix), self.is_sorted())
    }

    /// Returns all stored keys starting with `prefix`.  `prefix` need not end
    /// on a node boundary.
    pub fn keys(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
        self.prefix_iter(prefix).map(|(k, _)| k).collect()
    }
}

impl<'a, T> IntoIterator for &'a Trie<T> {
    type Item = (Vec<u8>, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
