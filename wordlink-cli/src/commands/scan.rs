//! Scan command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordlink_core::ScanOptions;

use super::{load_profile, map_files};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{open_output, JsonFormatter, MatchRecord, OutputFormatter, TextFormatter};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Dictionary profile
    #[arg(short = 'd', long = "profile", value_name = "PROFILE", required = true)]
    pub profile: PathBuf,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Drop overlapping matches, preferring the longer
    #[arg(long)]
    pub filter_overlaps: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One match per line
    Text,
    /// JSON array of matches
    Json,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        let profile = load_profile(&self.profile)?;
        let scanner = profile.scanner()?;
        let options = ScanOptions {
            filter_overlaps: self.filter_overlaps || profile.scan.filter_overlaps,
        };

        let files = resolve_patterns(&self.input)?;
        let per_file = map_files(&files, |path| {
            let text = FileReader::read_bytes(path)?;
            let file = path.display().to_string();
            let records: Vec<MatchRecord> = scanner
                .scan_with(&text, options)
                .into_iter()
                .map(|m| MatchRecord {
                    file: file.clone(),
                    keyword: m.keyword_str().into_owned(),
                    span: m.span,
                    target: m.payload.as_ref().clone(),
                })
                .collect();
            log::debug!("{}: {} match(es)", file, records.len());
            Ok(records)
        })?;

        let out = open_output(self.output.as_deref())?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(out)),
            OutputFormat::Json => Box::new(JsonFormatter::new(out)),
        };

        let mut total = 0;
        for record in per_file.iter().flatten() {
            formatter.format_match(record)?;
            total += 1;
        }
        formatter.finish()?;

        log::info!("Found {} match(es) in {} file(s)", total, files.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: ScanArgs,
    }

    #[test]
    fn test_defaults() {
        let harness = Harness::try_parse_from(["scan", "-d", "p.toml", "-i", "a.txt", "-i", "b.txt"])
            .unwrap();
        assert_eq!(harness.args.format, OutputFormat::Text);
        assert!(!harness.args.filter_overlaps);
        assert_eq!(harness.args.input, vec!["a.txt", "b.txt"]);
        assert!(harness.args.output.is_none());
    }

    #[test]
    fn test_profile_is_required() {
        assert!(Harness::try_parse_from(["scan", "-i", "a.txt"]).is_err());
    }

    #[test]
    fn test_json_and_filter_flags() {
        let harness = Harness::try_parse_from([
            "scan",
            "--profile",
            "p.toml",
            "-i",
            "*.txt",
            "-f",
            "json",
            "--filter-overlaps",
        ])
        .unwrap();
        assert_eq!(harness.args.format, OutputFormat::Json);
        assert!(harness.args.filter_overlaps);
    }
}
