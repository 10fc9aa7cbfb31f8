//! Case-insensitive dictionary search and replace
//!
//! Text is folded to ASCII lower case before scanning, which keeps every byte
//! offset valid in the original text. Unmatched gaps are copied from the
//! original; matched spans are replaced by the registered replacement.
//! Originals are registered as given, so only lower-case originals can match.

use std::sync::Arc;

use wordlink_core::{Automaton, Keywords, ScanOptions};

use crate::error::Result;

/// Dictionary of `original -> replacement` pairs
#[derive(Debug, Default)]
pub struct SearchAndReplace {
    automaton: Automaton<Arc<str>>,
}

impl SearchAndReplace {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a replacement
    ///
    /// Fails once the dictionary has been built.
    pub fn add_replacement(&mut self, original: &str, replacement: &str) -> Result<()> {
        self.automaton.add(original, Arc::from(replacement))?;
        Ok(())
    }

    /// Register every keyword of `entry` with the same replacement
    pub fn add_replacements<K>(&mut self, entry: &K, replacement: &str) -> Result<()>
    where
        K: Keywords + ?Sized,
    {
        self.automaton.add_all(entry, Arc::from(replacement))?;
        Ok(())
    }

    /// Seal the dictionary; replacing text does this implicitly
    pub fn build(&self) {
        self.automaton.build();
    }

    /// Number of distinct originals
    pub fn len(&self) -> usize {
        self.automaton.len()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.automaton.is_empty()
    }

    /// Replace matches in raw bytes
    pub fn replace_bytes(&self, text: &[u8]) -> Vec<u8> {
        let folded = text.to_ascii_lowercase();
        let matches = self
            .automaton
            .scan_with(&folded, ScanOptions::filtered());

        let mut out = Vec::with_capacity(text.len());
        let mut cursor = 0;
        for m in &matches {
            // The single-pass filter can leave an overlapping neighbour behind
            if m.start() < cursor {
                continue;
            }
            out.extend_from_slice(&text[cursor..m.start()]);
            out.extend_from_slice(m.payload.as_bytes());
            cursor = m.end();
        }
        out.extend_from_slice(&text[cursor..]);

        tracing::debug!(
            replaced = matches.len(),
            input_bytes = text.len(),
            output_bytes = out.len(),
            "search and replace finished"
        );
        out
    }

    /// Replace matches in UTF-8 text
    pub fn replace_text(&self, text: &str) -> Result<String> {
        Ok(String::from_utf8(self.replace_bytes(text.as_bytes()))?)
    }
}
