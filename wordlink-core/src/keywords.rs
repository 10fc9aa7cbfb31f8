//! Keyword storage and keyword-bearing entries

use std::sync::Arc;

/// An immutable keyword, shared between the automaton and its matches
pub type Keyword = Arc<[u8]>;

/// An entry that contributes several keywords under one payload
///
/// Registering such an entry with [`Automaton::add_all`](crate::Automaton::add_all)
/// attaches the same payload to every keyword it yields.
pub trait Keywords {
    /// The keywords of this entry
    fn keywords(&self) -> Vec<Keyword>;
}

impl<K: AsRef<[u8]>> Keywords for [K] {
    fn keywords(&self) -> Vec<Keyword> {
        self.iter().map(|k| Keyword::from(k.as_ref())).collect()
    }
}

impl<K: AsRef<[u8]>> Keywords for Vec<K> {
    fn keywords(&self) -> Vec<Keyword> {
        self.as_slice().keywords()
    }
}

impl<K: AsRef<[u8]>, const N: usize> Keywords for [K; N] {
    fn keywords(&self) -> Vec<Keyword> {
        self.as_slice().keywords()
    }
}
