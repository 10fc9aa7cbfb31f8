//! Replace command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::{load_profile, map_files};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::open_output;

/// Arguments for the replace command
#[derive(Debug, Args)]
pub struct ReplaceArgs {
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

impl ReplaceArgs {
    /// Execute the replace command
    pub fn execute(&self) -> Result<()> {
        let profile = load_profile(&self.profile)?;
        let replacer = profile.replacer()?;
        log::info!("Loaded {} replacement(s)", replacer.len());

        let files = resolve_patterns(&self.input)?;
        let outputs = map_files(&files, |path| {
            let text = FileReader::read_text(path)?;
            let replaced = replacer.replace_text(&text).map_err(|e| {
                CliError::ProcessingError(format!("{}: {e}", path.display()))
            })?;
            Ok(replaced)
        })?;

        let mut out = open_output(self.output.as_deref())?;
        for text in &outputs {
            out.write_all(text.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}
