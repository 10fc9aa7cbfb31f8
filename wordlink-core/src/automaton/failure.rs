//! Failure-link construction and the sealed transition function

use std::collections::VecDeque;

use super::node::{NodeArena, NodeId};

/// Failure links for every node of a trie, indexed by [`NodeId`]
///
/// Once this table exists the transition function is total: a missing root
/// edge is read as an edge back to the root.
#[derive(Debug, Clone)]
pub struct FailureTable {
    links: Vec<NodeId>,
}

impl FailureTable {
    /// Compute failure links breadth-first
    ///
    /// Children of the root fail to the root. For a node `r` with an edge
    /// `(byte, s)`, `s` fails to the target of `byte` from the first node on
    /// `r`'s failure chain that has one, or to the root.
    pub fn build<P>(arena: &NodeArena<P>) -> Self {
        let mut links = vec![NodeId::ROOT; arena.len()];
        let mut queue = VecDeque::new();

        for &(_, child) in arena.get(NodeId::ROOT).edges() {
            links[child.index()] = NodeId::ROOT;
            queue.push_back(child);
        }

        while let Some(r) = queue.pop_front() {
            for &(byte, s) in arena.get(r).edges() {
                queue.push_back(s);
                let target = goto(arena, &links, links[r.index()], byte);
                links[s.index()] = target;
            }
        }

        Self { links }
    }

    /// Failure link of `node` (the root fails to itself)
    #[inline]
    pub fn fail(&self, node: NodeId) -> NodeId {
        self.links[node.index()]
    }

    /// Sealed transition from `node` on `byte`
    #[inline]
    pub fn next<P>(&self, arena: &NodeArena<P>, node: NodeId, byte: u8) -> NodeId {
        goto(arena, &self.links, node, byte)
    }
}

/// Follow failure links from `node` until a transition on `byte` exists
fn goto<P>(arena: &NodeArena<P>, links: &[NodeId], mut node: NodeId, byte: u8) -> NodeId {
    loop {
        if let Some(child) = arena.get(node).child(byte) {
            return child;
        }
        if node.is_root() {
            return NodeId::ROOT;
        }
        node = links[node.index()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(arena: &mut NodeArena<()>, keyword: &[u8]) -> NodeId {
        keyword
            .iter()
            .fold(NodeId::ROOT, |node, &byte| arena.child_or_insert(node, byte))
    }

    fn path(arena: &NodeArena<()>, keyword: &[u8]) -> NodeId {
        keyword.iter().fold(NodeId::ROOT, |node, &byte| {
            arena.get(node).child(byte).unwrap()
        })
    }

    #[test]
    fn test_root_and_depth_one_fail_to_root() {
        let mut arena = NodeArena::new();
        insert(&mut arena, b"ab");
        insert(&mut arena, b"b");
        let table = FailureTable::build(&arena);

        assert_eq!(table.fail(NodeId::ROOT), NodeId::ROOT);
        assert_eq!(table.fail(path(&arena, b"a")), NodeId::ROOT);
        assert_eq!(table.fail(path(&arena, b"b")), NodeId::ROOT);
    }

    #[test]
    fn test_fail_to_longest_proper_suffix() {
        // Classic he/she/his/hers trie
        let mut arena = NodeArena::new();
        for keyword in [&b"he"[..], b"she", b"his", b"hers"] {
            insert(&mut arena, keyword);
        }
        let table = FailureTable::build(&arena);

        assert_eq!(table.fail(path(&arena, b"she")), path(&arena, b"he"));
        assert_eq!(table.fail(path(&arena, b"sh")), path(&arena, b"h"));
        assert_eq!(table.fail(path(&arena, b"hers")), path(&arena, b"s"));
        assert_eq!(table.fail(path(&arena, b"his")), path(&arena, b"s"));
        assert_eq!(table.fail(path(&arena, b"her")), NodeId::ROOT);
    }

    #[test]
    fn test_fail_depth_is_shorter() {
        let mut arena = NodeArena::new();
        for keyword in [&b"aaaa"[..], b"aab", b"ab"] {
            insert(&mut arena, keyword);
        }
        let table = FailureTable::build(&arena);

        for (id, node) in arena.iter().skip(1) {
            assert!(arena.get(table.fail(id)).depth < node.depth);
        }
        assert_eq!(table.fail(path(&arena, b"aaaa")), path(&arena, b"aaa"));
        assert_eq!(table.fail(path(&arena, b"aab")), path(&arena, b"ab"));
    }

    #[test]
    fn test_root_transition_is_total() {
        let mut arena = NodeArena::new();
        insert(&mut arena, b"x");
        let table = FailureTable::build(&arena);

        assert_eq!(table.next(&arena, NodeId::ROOT, b'q'), NodeId::ROOT);
        assert_eq!(table.next(&arena, NodeId::ROOT, b'x'), path(&arena, b"x"));
    }

    #[test]
    fn test_next_follows_failure_chain() {
        let mut arena = NodeArena::new();
        insert(&mut arena, b"abc");
        insert(&mut arena, b"bd");
        let table = FailureTable::build(&arena);

        let ab = path(&arena, b"ab");
        assert_eq!(table.next(&arena, ab, b'd'), path(&arena, b"bd"));
        assert_eq!(table.next(&arena, ab, b'z'), NodeId::ROOT);
    }
}
