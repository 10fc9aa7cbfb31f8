//! Wordlink CLI library
//!
//! This library provides the command-line interface for scanning,
//! search-and-replace and keyword linking driven by dictionary profiles.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

use anyhow::Result;
use clap::Parser;

pub use commands::Commands;
pub use error::{CliError, CliResult};

/// Keyword scanning, replacement and linking over text files
#[derive(Debug, Parser)]
#[command(name = "wordlink", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);
        self.command.execute()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when embedded in tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
