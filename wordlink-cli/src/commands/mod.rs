//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use wordlink_engine::Profile;

use crate::error::CliError;

pub mod link;
pub mod replace;
pub mod scan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report keyword matches in text files
    Scan(scan::ScanArgs),

    /// Apply the profile's search-and-replace dictionary
    Replace(replace::ReplaceArgs),

    /// Insert hyperlinks for the profile's link groups
    Link(link::LinkArgs),

    /// Check a profile and print a summary
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(),
            Commands::Replace(args) => args.execute(),
            Commands::Link(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Load a profile, tagging failures as profile errors
pub(crate) fn load_profile(path: &Path) -> Result<Profile> {
    Profile::from_file(path)
        .map_err(|e| CliError::ProfileError(e.to_string()))
        .with_context(|| format!("Failed to load profile: {}", path.display()))
}

/// Run `f` over every file in parallel, keeping input order
pub(crate) fn map_files<T, F>(files: &[PathBuf], f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync + Send,
{
    log::info!("Processing {} file(s)", files.len());
    files.par_iter().map(|path| f(path.as_path())).collect()
}
