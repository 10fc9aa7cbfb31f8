//! Streaming matcher state

use super::failure::FailureTable;
use super::node::{NodeArena, NodeId};

/// Bounds of the text currently spelled by the automaton's position
///
/// `end - begin` always equals the depth of the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MatchWindow {
    pub begin: usize,
    pub end: usize,
}

/// Cursor over a sealed automaton
pub(crate) struct Scanner<'a, P> {
    arena: &'a NodeArena<P>,
    failures: &'a FailureTable,
    node: NodeId,
    window: MatchWindow,
}

impl<'a, P> Scanner<'a, P> {
    pub fn new(arena: &'a NodeArena<P>, failures: &'a FailureTable) -> Self {
        Self {
            arena,
            failures,
            node: NodeId::ROOT,
            window: MatchWindow::default(),
        }
    }

    /// Consume one byte and return the node reached
    ///
    /// The window moves with the node in a single step, even when the
    /// transition chased several failure links.
    #[inline]
    pub fn step(&mut self, byte: u8) -> NodeId {
        let current = self.arena.get(self.node);

        if let Some(child) = current.child(byte) {
            self.window.end += 1;
            self.node = child;
        } else if self.node.is_root() {
            self.window.begin += 1;
            self.window.end = self.window.begin;
        } else {
            let next = self
                .failures
                .next(self.arena, self.failures.fail(self.node), byte);
            // end - begin == depth(next) after the move
            self.window.begin += current.depth + 1 - self.arena.get(next).depth;
            self.window.end += 1;
            self.node = next;
        }

        debug_assert_eq!(
            self.window.end - self.window.begin,
            self.arena.get(self.node).depth
        );
        self.node
    }

    #[inline]
    pub fn window(&self) -> MatchWindow {
        self.window
    }
}
