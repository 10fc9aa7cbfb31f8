//! Prioritized merging of several match sources
//!
//! A [`MatchChain`] runs its sources in order and folds each batch into an
//! accumulated, span-sorted, overlap-free list. Longer matches always win an
//! overlap. Between overlapping matches of equal length:
//!
//! - distinct spans: the match from the earlier source survives
//! - identical spans: the match from the later source survives
//!
//! The second rule falls out of span-only [`Match`] equality: "is this match
//! in the fresh batch" is true for both members of an identical-span pair.
//! It lets a specific dictionary appended last override an inherited one for
//! the exact same text while inherited sources keep ordinary priority.

use std::sync::Arc;

use crate::automaton::Automaton;
use crate::span::{Match, Span};

/// Anything that can find matches in text
pub trait MatchSource<P> {
    /// Find matches in `text`
    fn process(&self, text: &[u8]) -> Vec<Match<P>>;
}

impl<P: Clone> MatchSource<P> for Automaton<P> {
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        self.scan(text)
    }
}

impl<P, S: MatchSource<P> + ?Sized> MatchSource<P> for &S {
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        (**self).process(text)
    }
}

impl<P, S: MatchSource<P> + ?Sized> MatchSource<P> for Box<S> {
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        (**self).process(text)
    }
}

impl<P, S: MatchSource<P> + ?Sized> MatchSource<P> for Arc<S> {
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        (**self).process(text)
    }
}

/// Adapter turning a closure into a [`MatchSource`]
///
/// ```
/// use wordlink_core::{FnSource, Match, MatchChain};
///
/// let fixed = FnSource(|_text: &[u8]| vec![Match::new(&b"abc"[..], 0, 3, "fixed")]);
/// let chain = MatchChain::new().with(fixed);
/// assert_eq!(chain.process(b"abc").len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<P, F> MatchSource<P> for FnSource<F>
where
    F: Fn(&[u8]) -> Vec<Match<P>>,
{
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        (self.0)(text)
    }
}

type BoxedSource<P> = Box<dyn MatchSource<P> + Send + Sync>;

/// Ordered list of match sources merged under positional priority
pub struct MatchChain<P> {
    sources: Vec<BoxedSource<P>>,
}

impl<P> MatchChain<P> {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Create a chain from sources in priority order
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: MatchSource<P> + Send + Sync + 'static,
    {
        let mut chain = Self::new();
        for source in sources {
            chain.append(source);
        }
        chain
    }

    /// Add a source after all existing ones
    pub fn append<S>(&mut self, source: S)
    where
        S: MatchSource<P> + Send + Sync + 'static,
    {
        self.sources.push(Box::new(source));
    }

    /// Builder-style [`append`](Self::append)
    pub fn with<S>(mut self, source: S) -> Self
    where
        S: MatchSource<P> + Send + Sync + 'static,
    {
        self.append(source);
        self
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// True if the chain has no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<P: Clone> MatchChain<P> {
    /// Run every source over `text` and merge the results
    ///
    /// The output is sorted by span and free of overlaps.
    pub fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        let mut merged: Vec<Match<P>> = Vec::new();

        for (index, source) in self.sources.iter().enumerate() {
            let fresh = source.process(text);
            tracing::trace!(source = index, batch = fresh.len(), "merging match batch");

            let mut fresh_spans: Vec<Span> = fresh.iter().map(|m| m.span).collect();
            fresh_spans.sort_unstable();

            merged.extend(fresh);
            // Stable: accumulated matches stay ahead of fresh ones with the same span
            merged.sort();
            resolve_overlaps(&mut merged, &fresh_spans);
        }

        tracing::trace!(matches = merged.len(), "match chain merged");
        merged
    }
}

/// Remove overlaps from a sorted list, re-examining after every deletion
fn resolve_overlaps<P>(matches: &mut Vec<Match<P>>, fresh_spans: &[Span]) {
    let mut i = 0;
    while i + 1 < matches.len() {
        let (a, b) = (&matches[i], &matches[i + 1]);
        if !a.overlaps(b) {
            i += 1;
            continue;
        }

        if a.len() > b.len() {
            matches.remove(i + 1);
        } else if a.len() < b.len() {
            matches.remove(i);
        } else if fresh_spans.binary_search(&a.span).is_ok() {
            matches.remove(i);
        } else {
            matches.remove(i + 1);
        }
    }
}

impl<P: Clone> MatchSource<P> for MatchChain<P> {
    fn process(&self, text: &[u8]) -> Vec<Match<P>> {
        MatchChain::process(self, text)
    }
}

impl<P> Default for MatchChain<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for MatchChain<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchChain")
            .field("sources", &self.sources.len())
            .finish()
    }
}
