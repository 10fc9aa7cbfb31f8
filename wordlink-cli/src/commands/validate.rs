//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wordlink_engine::{KeywordLinker, Profile};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the dictionary profile to validate
    #[arg(short = 'd', long = "profile", value_name = "PROFILE", required = true)]
    pub profile: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating profile: {}", self.profile.display());

        let checked = Profile::from_file(&self.profile).and_then(|profile| {
            KeywordLinker::from_profile(&profile)?;
            Ok(profile)
        });

        match checked {
            Ok(profile) => {
                println!("✓ Profile is valid!");
                println!("  Replacements: {}", profile.replace.len());
                println!("  Link groups: {}", profile.groups.len());
                println!("  Links: {}", profile.link_count());
                let chain: Vec<&str> = profile
                    .chained_groups()?
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect();
                println!("  Chain: {}", chain.join(" < "));
                println!("  Blacklisted keywords: {}", profile.blacklist.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            profile: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_profile() {
        let toml_content = r#"
chain = ["b", "a"]

[[groups]]
name = "a"

[[groups.links]]
url = "http://a.example"
keywords = ["alpha"]

[[groups]]
name = "b"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            profile: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_unknown_chain_entry() {
        let toml_content = r#"
chain = ["missing"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            profile: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("unknown match source 'missing'"));
    }
}
