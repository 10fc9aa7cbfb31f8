//! Text transformations driven by keyword dictionaries
//!
//! This crate builds the consumers of `wordlink-core`: a case-folding
//! [`SearchAndReplace`] driver, a first-occurrence [`KeywordLinker`] with
//! pluggable decoration strategies, and TOML [`Profile`]s that assemble both
//! from a single dictionary file.
//!
//! ```rust
//! use wordlink_engine::KeywordLinker;
//!
//! let linker = KeywordLinker::builder()
//!     .add_url("http://www.latimes.com", ["Los Angeles Times"], &[])
//!     .build();
//!
//! assert_eq!(
//!     linker.link_text("Let's check out the Los Angeles Times!"),
//!     r#"Let's check out the <a href="http://www.latimes.com">Los Angeles Times</a>!"#
//! );
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod link;
pub mod profile;
pub mod replace;

// Re-export key types
pub use error::{EngineError, Result};
pub use link::{
    Blacklist, Decorator, HyperlinkStrategy, KeywordLinker, KeywordLinkerBuilder, LinkPayload,
    LinkSession,
};
pub use profile::{LinkEntry, LinkGroup, Profile, Replacement, ScanSection, Target};
pub use replace::SearchAndReplace;

// Re-export from core for convenience
pub use wordlink_core::{Automaton, Match, MatchChain, MatchSource, ScanOptions, Span};
