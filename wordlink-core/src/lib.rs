//! Multi-keyword matching with word boundaries and prioritized merging
//!
//! This crate implements an Aho-Corasick keyword automaton over raw bytes,
//! the span-ordered [`Match`] value it produces, and a [`MatchChain`] that
//! merges the output of several match sources into a single overlap-free
//! stream under positional priority.
//!
//! # Architecture
//!
//! - **Span layer**: [`Span`] and [`Match`], ordered and compared by span only
//! - **Automaton layer**: arena-backed trie, failure links and streaming scan
//! - **Merge layer**: the single-pass [`filter_overlaps`] and [`MatchChain`]
//!
//! # Example
//!
//! ```rust
//! use wordlink_core::{Automaton, ScanOptions};
//!
//! let automaton = Automaton::with_keywords(["Sling Blade", "Blade Runner"]);
//!
//! let matches = automaton.scan(b"Sling Blade Runner");
//! assert_eq!(matches.len(), 2);
//!
//! let filtered = automaton.scan_with(b"Sling Blade Runner", ScanOptions::filtered());
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(&*filtered[0].keyword, b"Blade Runner");
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod boundary;
pub mod chain;
pub mod error;
pub mod keywords;
pub mod overlap;
pub mod span;

// Re-export key types
pub use automaton::{Automaton, ScanOptions};
pub use boundary::{is_word_byte, is_word_delimiter};
pub use chain::{FnSource, MatchChain, MatchSource};
pub use error::{CoreError, Result};
pub use keywords::{Keyword, Keywords};
pub use overlap::filter_overlaps;
pub use span::{Match, Span};
