use hashbrown::hash_map::Entry;
use tracing::trace;

use crate::node::{common_prefix_len, Edge, Node};

impl<T> Node<T> {
    // Inserting "homework" into...
    // ```
    //         o
    //         | home
    //         *      value: old_value
    // ```
    // walks the whole "home" edge and hangs the remainder off its target...
    // ```
    //         o
    //         | home
    //         *      value: old_value
    //         | work
    //         *      value: new_value
    // ```
    // while inserting "hose" only shares "ho", so the edge is split first...
    // ```
    //         o
    //         | ho
    //         o
    //    me /   \ se
    //      *     *
    // ```
    pub fn insert(&mut self, key: &[u8], value: T) -> Option<T> {
        let mut cur = self;
        let mut rest = key;
        loop {
            let byte = match rest.first() {
                // Set value on current node.
                None => return cur.value.replace(value),
                Some(&b) => b,
            };
            let edge = match cur.edges.entry(byte) {
                Entry::Vacant(slot) => {
                    trace!(label_len = rest.len(), "adding leaf edge");
                    slot.insert(Edge::new(rest.to_vec(), Node::leaf(value)));
                    return None;
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };
            let common = common_prefix_len(rest, &edge.label);
            if common < edge.label.len() {
                trace!(at = common, label_len = edge.label.len(), "splitting edge");
                edge.split(common);
            }
            rest = &rest[common..];
            cur = &mut edge.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    #[test]
    fn test_insert_shapes() {
        let mut root = Node::empty();
        assert_eq!(root.insert(b"home", 1), None);
        assert_eq!(root.insert(b"homework", 2), None);
        assert_eq!(root.check_invariants(true), 2);

        let home = root.lookup(b'h').unwrap();
        assert_eq!(home.label, b"home");
        assert_eq!(home.next.value, Some(1));
        let work = home.next.lookup(b'w').unwrap();
        assert_eq!(work.label, b"work");
        assert_eq!(work.next.value, Some(2));
    }

    #[test]
    fn test_insert_splits_on_mismatch() {
        let mut root = Node::empty();
        root.insert(b"home", 1);
        root.insert(b"hose", 2);
        assert_eq!(root.check_invariants(true), 2);

        let ho = root.lookup(b'h').unwrap();
        assert_eq!(ho.label, b"ho");
        assert!(!ho.next.is_leaf());
        assert_eq!(ho.next.lookup(b'm').unwrap().label, b"me");
        assert_eq!(ho.next.lookup(b's').unwrap().label, b"se");
    }

    #[test]
    fn test_insert_ending_inside_edge() {
        let mut root = Node::empty();
        root.insert(b"homework", 1);
        root.insert(b"home", 2);
        assert_eq!(root.check_invariants(true), 2);

        let home = root.lookup(b'h').unwrap();
        assert_eq!(home.label, b"home");
        assert_eq!(home.next.value, Some(2));
        assert_eq!(home.next.lookup(b'w').unwrap().label, b"work");
    }

    #[test]
    fn test_insert_overwrites() {
        let mut root = Node::empty();
        assert_eq!(root.insert(b"key", 1), None);
        assert_eq!(root.insert(b"key", 2), Some(1));
        assert_eq!(root.descend(b"key").unwrap().value, Some(2));
        assert_eq!(root.edges.len(), 1);
        assert_eq!(root.check_invariants(true), 1);
    }

    #[test]
    fn test_insert_empty_key_on_root() {
        let mut root = Node::empty();
        assert_eq!(root.insert(b"", 1), None);
        assert!(root.is_leaf());
        assert!(root.edges.is_empty());
    }
}
