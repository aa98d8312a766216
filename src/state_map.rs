//! Maps keyed by search States, using a faster Hasher than the default one.

use crate::search::Node;

/// A [`HashMap`](hashbrown::HashMap) for [`Node`]s with a faster Hasher
pub(crate) type NodeMap<V> = hashbrown::HashMap<Node, V, BuildNodeHasher>;

/// A [`BuildHasher`](std::hash::BuildHasher) specialized on Nodes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BuildNodeHasher;

/// A [`Hasher`](std::hash::Hasher) specialized on Nodes.
///
/// A Node hashes as two `usize` writes, which are folded together and spread over all bits of the
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeHasher(u64);

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;

impl std::hash::BuildHasher for BuildNodeHasher {
    type Hasher = NodeHasher;
    fn build_hasher(&self) -> NodeHasher {
        NodeHasher(0)
    }
}

impl std::hash::Hasher for NodeHasher {
    /// panics, since only Nodes are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with Nodes")
    }
    fn write_usize(&mut self, value: usize) {
        self.0 = (self.0.rotate_left(5) ^ value as u64).wrapping_mul(SEED);
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

/// create a new [`NodeMap`] by calling the
/// [`with_capacity_and_hasher`](hashbrown::HashMap::with_capacity_and_hasher) Function
pub(crate) fn node_map_with_cap<V>(capacity: usize) -> NodeMap<V> {
    NodeMap::with_capacity_and_hasher(capacity, BuildNodeHasher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasher;

    #[test]
    fn distinct_states_hash_differently() {
        let hash = |node: Node| BuildNodeHasher.hash_one(node);
        assert_ne!(hash(Node::new(1, 2)), hash(Node::new(2, 1)));
        assert_ne!(hash(Node::new(0, 1)), hash(Node::new(1, 1)));
        assert_eq!(hash(Node::new(7, 3)), hash(Node::new(7, 3)));
    }

    #[test]
    fn map_lookup() {
        let mut map = node_map_with_cap(4);
        map.insert(Node::new(3, 2), "a");
        map.insert(Node::new(2, 3), "b");
        assert_eq!(map[&Node::new(3, 2)], "a");
        assert_eq!(map[&Node::new(2, 3)], "b");
        assert!(!map.contains_key(&Node::new(3, 3)));
    }
}
