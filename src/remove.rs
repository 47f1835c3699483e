// There are two invariants about our tree we'd like to maintain inductively.
// 1. Nodes other than the root have either edges or a value.
// 2. No node other than the root is without a value and has only a single
//    edge.  These nodes must be merged into their child by concatenating
//    the two edge labels.
//
// Say we're deleting a key `k` that's present in our trie.  We follow the
// edges whose labels spell out `k` to the node holding the value, and take
// the value out.
//
// That can newly break both invariants.  If the node has no edges left, it
// must be unlinked from its parent to preserve invariant 1.  If it has just
// one edge, it breaks invariant 2, and the parent must merge the edge into it
// with the edge below it.
//
// Unlinking a node from its parent may in turn leave the parent with a single
// edge and no value, so the grandparent patches that up the same way on the
// way back up.

use tracing::trace;

use crate::node::{strip_label, Node};

pub struct Removed<T> {
    pub value: T,
    /// The node we descended into is now empty and must be unlinked.
    prune: bool,
}

impl<T> Node<T> {
    pub fn remove(&mut self, key: &[u8], is_root: bool) -> Option<Removed<T>> {
        let branch_byte = match key.first() {
            None => {
                let value = self.value.take()?;
                let prune = !is_root && self.edges.is_empty();
                return Some(Removed { value, prune });
            }
            Some(&b) => b,
        };

        let edge = self.edges.get_mut(&branch_byte)?;
        let rest = strip_label(key, &edge.label)?;
        let Removed { value, prune } = edge.next.remove(rest, false)?;

        if prune {
            trace!(byte = branch_byte, "unlinking empty node");
            self.edges.remove(&branch_byte);
            let prune = !is_root && !self.is_leaf() && self.edges.is_empty();
            return Some(Removed { value, prune });
        }

        if !edge.next.is_leaf() && edge.next.edges.len() == 1 {
            trace!(byte = branch_byte, "merging single-child node");
            edge.merge();
        }
        Some(Removed {
            value,
            prune: false,
        })
    }
}
