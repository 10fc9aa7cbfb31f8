//! Aho-Corasick keyword automaton
//!
//! An [`Automaton`] is built in two phases. While *building*, keywords are
//! added to a byte trie. Sealing computes the failure links once; after that
//! the automaton is read-only and can be scanned from many threads at once.
//! Sealing happens on [`Automaton::build`] or implicitly on the first scan.
//!
//! # Module Organization
//!
//! - `node`: arena of trie nodes addressed by index
//! - `failure`: breadth-first failure-link construction
//! - `scan`: the streaming cursor and its match window

mod failure;
mod node;
mod scan;

use std::fmt;
use std::sync::OnceLock;

use crate::boundary::is_around_word;
use crate::error::{CoreError, Result};
use crate::keywords::{Keyword, Keywords};
use crate::overlap::filter_overlaps;
use crate::span::Match;

use failure::FailureTable;
use node::{Accept, NodeArena, NodeId};
use scan::Scanner;

/// Options for [`Automaton::scan_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Run [`filter_overlaps`] over the result
    pub filter_overlaps: bool,
}

impl ScanOptions {
    /// Options with overlap filtering enabled
    pub fn filtered() -> Self {
        Self {
            filter_overlaps: true,
        }
    }
}

/// Multi-keyword matcher over bytes
///
/// Matches are only reported on word boundaries: the bytes on either side of
/// a match must not be ASCII alphanumerics or `_`.
///
/// ```
/// use wordlink_core::Automaton;
///
/// let mut automaton = Automaton::new();
/// automaton.add("foo", 1).unwrap();
/// automaton.add("bar", 2).unwrap();
///
/// let matches = automaton.scan(b"foo, bar and foobar");
/// let payloads: Vec<i32> = matches.iter().map(|m| m.payload).collect();
/// assert_eq!(payloads, vec![1, 2]);
/// ```
pub struct Automaton<P = Keyword> {
    arena: NodeArena<P>,
    keywords: usize,
    failures: OnceLock<FailureTable>,
}

impl<P> Automaton<P> {
    /// Create an empty automaton in the building state
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            keywords: 0,
            failures: OnceLock::new(),
        }
    }

    /// Register `keyword` with `payload`
    ///
    /// Adding the same keyword twice keeps the last payload. An empty keyword
    /// is accepted and never matches. Fails once the automaton is sealed.
    pub fn add(&mut self, keyword: impl AsRef<[u8]>, payload: P) -> Result<()> {
        let keyword = keyword.as_ref();
        if self.is_sealed() {
            return Err(CoreError::sealed(keyword));
        }
        if keyword.is_empty() {
            return Ok(());
        }

        let node = keyword
            .iter()
            .fold(NodeId::ROOT, |node, &byte| self.arena.child_or_insert(node, byte));

        let accept = &mut self.arena.get_mut(node).accept;
        if accept.is_none() {
            self.keywords += 1;
        }
        *accept = Some(Accept {
            keyword: Keyword::from(keyword),
            payload,
        });
        Ok(())
    }

    /// Register every keyword of `entry` with a clone of `payload`
    pub fn add_all<K>(&mut self, entry: &K, payload: P) -> Result<()>
    where
        K: Keywords + ?Sized,
        P: Clone,
    {
        for keyword in entry.keywords() {
            self.add(&*keyword, payload.clone())?;
        }
        Ok(())
    }

    /// Compute failure links, sealing the automaton
    ///
    /// Calling this again is a no-op.
    pub fn build(&self) {
        self.sealed();
    }

    /// True once failure links have been computed
    pub fn is_sealed(&self) -> bool {
        self.failures.get().is_some()
    }

    /// Number of distinct keywords registered
    pub fn len(&self) -> usize {
        self.keywords
    }

    /// True if no keyword has been registered
    pub fn is_empty(&self) -> bool {
        self.keywords == 0
    }

    /// Number of trie nodes, including the root
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn sealed(&self) -> &FailureTable {
        self.failures.get_or_init(|| {
            let table = FailureTable::build(&self.arena);
            tracing::debug!(
                keywords = self.keywords,
                nodes = self.arena.len(),
                "sealed keyword automaton"
            );
            table
        })
    }

    /// Call `f` for every match in `text`, in order of match end
    ///
    /// Seals the automaton first if needed.
    pub fn for_each_match<F>(&self, text: &[u8], mut f: F)
    where
        P: Clone,
        F: FnMut(Match<P>),
    {
        let failures = self.sealed();
        let mut scanner = Scanner::new(&self.arena, failures);

        for &byte in text {
            let node = scanner.step(byte);
            if let Some(accept) = &self.arena.get(node).accept {
                let window = scanner.window();
                if is_around_word(text, window.begin, window.end) {
                    f(Match::new(
                        accept.keyword.clone(),
                        window.begin,
                        window.end,
                        accept.payload.clone(),
                    ));
                }
            }
        }
    }

    /// Find all matches in `text`, sorted by span
    pub fn scan(&self, text: &[u8]) -> Vec<Match<P>>
    where
        P: Clone,
    {
        self.scan_with(text, ScanOptions::default())
    }

    /// Find all matches in `text`, optionally filtering overlaps
    pub fn scan_with(&self, text: &[u8], options: ScanOptions) -> Vec<Match<P>>
    where
        P: Clone,
    {
        let mut matches = Vec::new();
        self.for_each_match(text, |m| matches.push(m));

        if options.filter_overlaps {
            filter_overlaps(&mut matches);
        }
        matches
    }
}

impl Automaton<Keyword> {
    /// Register a keyword whose payload is the keyword itself
    pub fn add_keyword(&mut self, keyword: impl AsRef<[u8]>) -> Result<()> {
        let keyword = Keyword::from(keyword.as_ref());
        self.add(keyword.clone(), keyword)
    }

    /// Build and seal an automaton from a list of keywords
    pub fn with_keywords<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut automaton = Self::new();
        for keyword in keywords {
            let keyword = Keyword::from(keyword.as_ref());
            // Cannot fail: nothing has sealed the automaton yet
            let _ = automaton.add(keyword.clone(), keyword);
        }
        automaton.build();
        automaton
    }
}

impl<P> Default for Automaton<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Automaton<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("keywords", &self.keywords)
            .field("nodes", &self.arena.len())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}
