//! Arena-addressed trie nodes
//!
//! Nodes refer to each other by [`NodeId`], an index into the owning
//! [`NodeArena`]. Failure links point back up the trie (and the root's points
//! at itself), so indices stand in for references.

use smallvec::SmallVec;

use crate::keywords::Keyword;

/// Index of a node in its arena
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, always the first allocated
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == NodeId::ROOT
    }
}

/// Keyword and payload recorded on an accepting node
#[derive(Debug, Clone)]
pub struct Accept<P> {
    pub keyword: Keyword,
    pub payload: P,
}

/// A trie node
///
/// Edges are kept sorted by byte; most nodes have only a handful.
#[derive(Debug, Clone)]
pub struct TrieNode<P> {
    pub depth: usize,
    edges: SmallVec<[(u8, NodeId); 4]>,
    pub accept: Option<Accept<P>>,
}

impl<P> TrieNode<P> {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            edges: SmallVec::new(),
            accept: None,
        }
    }

    /// Direct child on `byte`, if any
    #[inline]
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|i| self.edges[i].1)
    }

    /// All `(byte, child)` edges in byte order
    pub fn edges(&self) -> &[(u8, NodeId)] {
        &self.edges
    }
}

/// Owns every node of one trie
#[derive(Debug, Clone)]
pub struct NodeArena<P> {
    nodes: Vec<TrieNode<P>>,
}

impl<P> NodeArena<P> {
    /// Creates an arena holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(0)],
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode<P> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode<P> {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Child of `parent` on `byte`, created if missing
    pub fn child_or_insert(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let parent_node = &self.nodes[parent.index()];
        match parent_node
            .edges
            .binary_search_by_key(&byte, |&(b, _)| b)
        {
            Ok(i) => parent_node.edges[i].1,
            Err(slot) => {
                let id = NodeId(self.nodes.len());
                let depth = parent_node.depth + 1;
                self.nodes.push(TrieNode::new(depth));
                self.nodes[parent.index()].edges.insert(slot, (byte, id));
                id
            }
        }
    }

    /// Iterate nodes with their ids
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TrieNode<P>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
}

impl<P> Default for NodeArena<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_arena_has_root() {
        let arena: NodeArena<()> = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(NodeId::ROOT).depth, 0);
        assert!(arena.get(NodeId::ROOT).edges().is_empty());
    }

    #[test]
    fn test_child_or_insert_creates_once() {
        let mut arena: NodeArena<()> = NodeArena::new();
        let a = arena.child_or_insert(NodeId::ROOT, b'a');
        let again = arena.child_or_insert(NodeId::ROOT, b'a');
        assert_eq!(a, again);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).depth, 1);
    }

    #[test]
    fn test_edges_stay_sorted() {
        let mut arena: NodeArena<()> = NodeArena::new();
        for byte in [b'z', b'a', b'm', b'b', b'y', b'c'] {
            arena.child_or_insert(NodeId::ROOT, byte);
        }
        let bytes: Vec<u8> = arena
            .get(NodeId::ROOT)
            .edges()
            .iter()
            .map(|&(b, _)| b)
            .collect();
        assert_eq!(bytes, b"abcmyz".to_vec());
        assert!(arena.get(NodeId::ROOT).child(b'm').is_some());
        assert!(arena.get(NodeId::ROOT).child(b'q').is_none());
    }

    #[test]
    fn test_depth_follows_path() {
        let mut arena: NodeArena<()> = NodeArena::new();
        let mut node = NodeId::ROOT;
        for byte in b"abc" {
            node = arena.child_or_insert(node, *byte);
        }
        assert_eq!(arena.get(node).depth, 3);
    }
}
