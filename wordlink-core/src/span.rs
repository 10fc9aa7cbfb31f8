//! Span and match value types
//!
//! A [`Match`] is identified by its [`Span`] alone: equality and ordering
//! ignore the keyword and payload. The chain merge relies on this when it
//! asks whether a match belongs to the batch a source just produced.

use std::cmp::Ordering;
use std::fmt;

use crate::keywords::Keyword;

/// Half-open byte interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Creates a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// Number of bytes covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-width span
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two spans overlap
    ///
    /// Spans sharing a start or an end always overlap, as do interleaving
    /// spans. Touching spans (`a.end == b.start`) do not.
    pub fn overlaps(&self, other: &Span) -> bool {
        if self.start == other.start || self.end == other.end {
            return true;
        }
        match self.start.cmp(&other.start) {
            Ordering::Less => self.end > other.start,
            Ordering::Greater => other.end > self.start,
            Ordering::Equal => true,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// One keyword occurrence with its payload
#[derive(Clone)]
pub struct Match<P> {
    /// The keyword that matched
    pub keyword: Keyword,
    /// Where the keyword was found
    pub span: Span,
    /// Caller-supplied value registered with the keyword
    pub payload: P,
}

impl<P> Match<P> {
    /// Creates a new match
    pub fn new(keyword: impl Into<Keyword>, start: usize, end: usize, payload: P) -> Self {
        Self {
            keyword: keyword.into(),
            span: Span::new(start, end),
            payload,
        }
    }

    /// Offset of the first matched byte
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Offset one past the last matched byte
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Length of the match in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// True for a zero-width match
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Check whether two matches overlap (see [`Span::overlaps`])
    #[inline]
    pub fn overlaps<Q>(&self, other: &Match<Q>) -> bool {
        self.span.overlaps(&other.span)
    }

    /// The keyword as text, replacing invalid UTF-8
    pub fn keyword_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.keyword)
    }

    /// Replace the payload, keeping keyword and span
    pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> Match<Q> {
        Match {
            keyword: self.keyword,
            span: self.span,
            payload: f(self.payload),
        }
    }
}

impl<P> PartialEq for Match<P> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span
    }
}

impl<P> Eq for Match<P> {}

impl<P> PartialOrd for Match<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Match<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span.cmp(&other.span)
    }
}

impl<P: fmt::Debug> fmt::Debug for Match<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("keyword", &self.keyword_str())
            .field("start", &self.span.start)
            .field("end", &self.span.end)
            .field("payload", &self.payload)
            .finish()
    }
}
