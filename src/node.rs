use std::io;
use std::mem;

use hashbrown::HashMap;

/// A point in the key space.  The full key of a node is the concatenation of
/// the edge labels on the path from the root.
pub struct Node<T> {
    pub edges: HashMap<u8, Edge<T>>,
    pub value: Option<T>,
}

/// A labeled transition to a child node, keyed in its parent by the first byte
/// of `label`.
pub struct Edge<T> {
    pub label: Vec<u8>,
    pub next: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Node<T> {
    pub fn empty() -> Self {
        Self {
            edges: HashMap::new(),
            value: None,
        }
    }

    pub fn leaf(value: T) -> Self {
        Self {
            edges: HashMap::new(),
            value: Some(value),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.value.is_some()
    }

    pub fn lookup(&self, byte: u8) -> Option<&Edge<T>> {
        self.edges.get(&byte)
    }

    pub fn add_edge(&mut self, edge: Edge<T>) {
        let byte = edge.first_byte();
        let prev = self.edges.insert(byte, edge);
        debug_assert!(prev.is_none(), "duplicate edge for byte {}", byte);
    }

    /// Outgoing edges, ascending by first label byte when `sorted` is set and
    /// in hash order otherwise.
    pub fn children(&self, sorted: bool) -> Vec<&Edge<T>> {
        let mut pairs = self.edges.iter().collect::<Vec<_>>();
        if sorted {
            pairs.sort_unstable_by_key(|&(&byte, _)| byte);
        }
        pairs.into_iter().map(|(_, edge)| edge).collect()
    }

    /// Follows `key` to the node it ends on exactly.  Ending partway along an
    /// edge counts as absent.
    pub fn descend(&self, key: &[u8]) -> Option<&Node<T>> {
        let mut cur = self;
        let mut rest = key;
        while let Some(&byte) = rest.first() {
            let edge = cur.lookup(byte)?;
            rest = strip_label(rest, &edge.label)?;
            cur = &edge.next;
        }
        Some(cur)
    }

    pub fn descend_mut(&mut self, key: &[u8]) -> Option<&mut Node<T>> {
        let mut cur = self;
        let mut rest = key;
        while let Some(&byte) = rest.first() {
            let edge = cur.edges.get_mut(&byte)?;
            rest = strip_label(rest, &edge.label)?;
            cur = &mut edge.next;
        }
        Some(cur)
    }

    /// Finds the node below which every key starts with `prefix`.  The prefix
    /// may stop in the middle of an edge, in which case the returned key is
    /// extended with the rest of that edge's label so it names the node.
    pub fn seek(&self, prefix: &[u8]) -> Option<(&Node<T>, Vec<u8>)> {
        let mut cur = self;
        let mut rest = prefix;
        let mut key = prefix.to_vec();
        while let Some(&byte) = rest.first() {
            let edge = cur.lookup(byte)?;
            let common = common_prefix_len(rest, &edge.label);
            if common < edge.label.len() {
                if common < rest.len() {
                    return None;
                }
                key.extend_from_slice(&edge.label[common..]);
                return Some((&edge.next, key));
            }
            rest = &rest[common..];
            cur = &edge.next;
        }
        Some((cur, key))
    }

    pub fn debug(&self, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(
            out,
            "Node {{ is_leaf: {:?}, edges: {} }}",
            self.is_leaf(),
            self.edges.len()
        )?;

        let children = self.children(true);
        if let Some((last, init)) = children.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for edge in init {
                write!(out, "{} \u{251C} {:?}: ", indent, String::from_utf8_lossy(&edge.label))?;
                edge.next.debug(&child_indent, out)?;
            }

            write!(out, "{} \u{2514} {:?}: ", indent, String::from_utf8_lossy(&last.label))?;
            let child_indent = format!("{}  ", indent);
            last.next.debug(&child_indent, out)?;
        }
        Ok(())
    }
}

impl<T> Edge<T> {
    pub fn new(label: Vec<u8>, next: Node<T>) -> Self {
        debug_assert!(!label.is_empty(), "edge labels must be non-empty");
        Self { label, next }
    }

    pub fn first_byte(&self) -> u8 {
        self.label[0]
    }

    // The edge...
    // ```
    //         o
    //         | abc
    //         *      value: old_value
    //       / | \    edges: old_edges
    // ```
    // split at 1 becomes...
    // ```
    //         o
    //         | a
    //         o      value: None
    //         | bc
    //         *      value: old_value
    //       / | \    edges: old_edges
    // ```
    pub fn split(&mut self, at: usize) {
        debug_assert!(0 < at && at < self.label.len());
        let tail = self.label.split_off(at);
        let old_next = mem::replace(&mut self.next, Node::empty());
        self.next.add_edge(Edge::new(tail, old_next));
    }

    // Inverse of `split`: the target has no value and a single edge, so we
    // absorb that edge's label and point straight at the grandchild.
    pub fn merge(&mut self) {
        debug_assert!(!self.next.is_leaf() && self.next.edges.len() == 1);
        let edges = mem::take(&mut self.next.edges);
        if let Some((_, Edge { label, next })) = edges.into_iter().next() {
            self.label.extend_from_slice(&label);
            self.next = next;
        }
    }
}

/// Length of the longest common prefix of `a` and `b`.
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Strips a whole edge label off the front of `key`.
pub fn strip_label<'a>(key: &'a [u8], label: &[u8]) -> Option<&'a [u8]> {
    if key.starts_with(label) {
        Some(&key[label.len()..])
    } else {
        None
    }
}

#[cfg(test)]
impl<T> Node<T> {
    /// Panics if the subtree rooted here breaks any structural invariant.
    /// Returns the number of values stored in it.
    pub fn check_invariants(&self, is_root: bool) -> usize {
        if !is_root && !self.is_leaf() {
            assert!(!self.edges.is_empty(), "dangling non-leaf node");
            assert!(self.edges.len() != 1, "unmerged single-child node");
        }
        let mut count = self.is_leaf() as usize;
        for (&byte, edge) in &self.edges {
            assert!(!edge.label.is_empty(), "empty edge label");
            assert_eq!(byte, edge.label[0], "edge keyed under the wrong byte");
            count += edge.next.check_invariants(false);
        }
        count
    }
}
