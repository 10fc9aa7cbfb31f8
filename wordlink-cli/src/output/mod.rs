//! Output formatting module

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use wordlink_core::Span;
use wordlink_engine::Target;

/// One scan hit
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// File the match was found in
    pub file: String,
    /// Matched keyword
    pub keyword: String,
    /// Byte span within the file
    pub span: Span,
    /// What the keyword stands for in the profile
    pub target: Target,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single match
    fn format_match(&mut self, record: &MatchRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Destination for command output
pub type Output = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout when absent
pub fn open_output(path: Option<&Path>) -> Result<Output> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
