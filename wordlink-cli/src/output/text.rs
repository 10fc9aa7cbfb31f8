//! Plain text output formatter

use super::{MatchRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use wordlink_engine::Target;

/// Plain text formatter - outputs one match per line
///
/// `file:start-end<TAB>keyword<TAB>target`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn describe(target: &Target) -> String {
    match target {
        Target::Replace { replacement } => format!("replace -> {replacement}"),
        Target::Link { group, url } => format!("link[{group}] -> {url}"),
        Target::Blacklist => "blacklist".to_string(),
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_match(&mut self, record: &MatchRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{}:{}-{}\t{}\t{}",
            record.file,
            record.span.start,
            record.span.end,
            record.keyword,
            describe(&record.target)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
