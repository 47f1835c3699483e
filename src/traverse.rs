use crate::trie::Trie;

/// A node as seen by a [`Trie::traverse`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a, T> {
    /// Number of edges between the root and this node.  The root is at 0.
    pub depth: usize,
    /// Concatenation of the edge labels from the root to this node.
    pub path: &'a [u8],
    /// The stored value, present exactly when a key ends at this node.
    pub value: Option<&'a T>,
}

impl<'a, T> Visit<'a, T> {
    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }
}

impl<T> Trie<T> {
    /// Walks the trie depth-first in pre-order, calling `f` on every node
    /// starting with the root.
    ///
    /// If `f` returns `Ok(false)` the descendants of that node are skipped.
    /// If it returns an error the walk stops and the error is returned as is.
    /// Children are visited in ascending order of their first label byte when
    /// the trie is sorted and in an unspecified order otherwise.
    pub fn traverse<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Visit<'_, T>) -> Result<bool, E>,
    {
        let sorted = self.is_sorted();
        let mut stack = vec![(&self.root, 0, vec![])];
        while let Some((node, depth, path)) = stack.pop() {
            let visit = Visit {
                depth,
                path: &path,
                value: node.value.as_ref(),
            };
            if !f(visit)? {
                continue;
            }
            for edge in node.children(sorted).into_iter().rev() {
                let mut child_path = Vec::with_capacity(path.len() + edge.label.len());
                child_path.extend_from_slice(&path);
                child_path.extend_from_slice(&edge.label);
                stack.push((&edge.next, depth + 1, child_path));
            }
        }
        Ok(())
    }
}
