//! Link command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use wordlink_engine::KeywordLinker;

use super::{load_profile, map_files};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::open_output;

/// Arguments for the link command
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Dictionary profile
    #[arg(short = 'd', long = "profile", value_name = "PROFILE", required = true)]
    pub profile: PathBuf,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LinkArgs {
    /// Execute the link command
    ///
    /// Every input file is its own document: a URL is linked at most once
    /// per file.
    pub fn execute(&self) -> Result<()> {
        let profile = load_profile(&self.profile)?;
        let linker = KeywordLinker::from_profile(&profile)
            .map_err(|e| CliError::ProfileError(e.to_string()))?;
        log::info!(
            "Linking with {} source(s), {} link(s)",
            linker.source_count(),
            profile.link_count()
        );

        let files = resolve_patterns(&self.input)?;
        let outputs = map_files(&files, |path| {
            let text = FileReader::read_text(path)?;
            let mut session = linker.session();
            let linked = session.link_run(&text);
            log::debug!("{}: {} link(s)", path.display(), session.linked_count());
            Ok(linked)
        })?;

        let mut out = open_output(self.output.as_deref())?;
        for text in &outputs {
            out.write_all(text.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}
