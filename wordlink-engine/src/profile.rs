//! Dictionary profiles
//!
//! A profile is a TOML file describing replacements, link groups, the
//! priority order of those groups and a blacklist:
//!
//! ```toml
//! chain = ["general", "travel"]
//! blacklist = ["Los Angeles Times"]
//!
//! [scan]
//! filter_overlaps = true
//!
//! [[replace]]
//! original = "los angeles"
//! replacement = "L.A."
//!
//! [[groups]]
//! name = "travel"
//!
//! [[groups.links]]
//! url = "http://travel.latimes.com"
//! keywords = ["travel", "vacation"]
//! attributes = { class = "travel" }
//! ```
//!
//! Groups later in `chain` take priority over earlier ones; without `chain`
//! groups are consulted in declaration order. The blacklist forms the
//! linker's own dictionary and so overrides every group.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wordlink_core::{Automaton, ScanOptions};

use crate::error::{EngineError, Result};
use crate::link::{HyperlinkStrategy, KeywordLinker};
use crate::replace::SearchAndReplace;

/// Parsed dictionary profile
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanSection,

    /// Search-and-replace entries
    #[serde(default)]
    pub replace: Vec<Replacement>,

    /// Link groups
    #[serde(default)]
    pub groups: Vec<LinkGroup>,

    /// Group names in priority order, lowest first
    #[serde(default)]
    pub chain: Option<Vec<String>>,

    /// Keywords that are never linked
    #[serde(default)]
    pub blacklist: Vec<String>,
}

/// Scan-related settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanSection {
    /// Apply the single-pass overlap filter to scan results
    #[serde(default)]
    pub filter_overlaps: bool,
}

impl From<&ScanSection> for ScanOptions {
    fn from(section: &ScanSection) -> Self {
        ScanOptions {
            filter_overlaps: section.filter_overlaps,
        }
    }
}

/// One `original -> replacement` pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    /// Text to find, matched against lower-cased input
    pub original: String,
    /// Text to substitute
    pub replacement: String,
}

/// Named set of links forming one match source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkGroup {
    /// Name referenced from `chain`
    pub name: String,
    /// Links of this group
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

/// Keywords linked to one URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkEntry {
    /// Link target
    pub url: String,
    /// Keywords sharing this link
    pub keywords: Vec<String>,
    /// Extra HTML attributes, rendered after `href` in name order
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl LinkEntry {
    fn strategy(&self) -> HyperlinkStrategy {
        self.attributes.iter().fold(
            HyperlinkStrategy::new(self.url.as_str()).with_keywords(self.keywords.iter().cloned()),
            |strategy, (name, value)| strategy.with_attribute(name.as_str(), value.as_str()),
        )
    }
}

impl LinkGroup {
    /// Build this group's linker
    pub fn linker(&self) -> KeywordLinker {
        self.links
            .iter()
            .fold(KeywordLinker::builder(), |builder, entry| {
                builder.add_strategy(entry.strategy())
            })
            .build()
    }
}

/// What a scanned keyword stands for in the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Target {
    /// A search-and-replace original
    Replace {
        /// Substituted text
        replacement: String,
    },
    /// A link keyword
    Link {
        /// Owning group
        group: String,
        /// Link target
        url: String,
    },
    /// A blacklisted keyword
    Blacklist,
}

impl Profile {
    /// Read and validate a profile file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Io(format!("failed to read profile {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading profile");
        Self::from_toml_str(&content)
    }

    /// Parse and validate a profile
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check the profile for structural mistakes
    pub fn validate(&self) -> Result<()> {
        for entry in &self.replace {
            if entry.original.is_empty() {
                return Err(EngineError::Config(
                    "replacement with empty original".to_string(),
                ));
            }
            if entry.original.bytes().any(|b| b.is_ascii_uppercase()) {
                tracing::warn!(
                    original = %entry.original,
                    "replacement original has upper-case letters and will never match"
                );
            }
        }

        let mut names = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                return Err(EngineError::Config("link group without a name".to_string()));
            }
            if !names.insert(group.name.as_str()) {
                return Err(EngineError::Config(format!(
                    "duplicate link group '{}'",
                    group.name
                )));
            }
            for link in &group.links {
                if link.url.is_empty() {
                    return Err(EngineError::Config(format!(
                        "link without url in group '{}'",
                        group.name
                    )));
                }
                if link.keywords.iter().all(String::is_empty) {
                    return Err(EngineError::Config(format!(
                        "link to {} in group '{}' has no keywords",
                        link.url, group.name
                    )));
                }
            }
        }

        if let Some(chain) = &self.chain {
            for name in chain {
                if !names.contains(name.as_str()) {
                    return Err(EngineError::InvalidSource { name: name.clone() });
                }
            }
            for group in &self.groups {
                if !chain.contains(&group.name) {
                    tracing::warn!(group = %group.name, "link group is not part of the chain");
                }
            }
        }

        Ok(())
    }

    /// Groups in priority order, lowest first
    pub fn chained_groups(&self) -> Result<Vec<&LinkGroup>> {
        match &self.chain {
            None => Ok(self.groups.iter().collect()),
            Some(chain) => chain
                .iter()
                .map(|name| {
                    self.groups
                        .iter()
                        .find(|group| &group.name == name)
                        .ok_or_else(|| EngineError::InvalidSource { name: name.clone() })
                })
                .collect(),
        }
    }

    /// Build the search-and-replace dictionary
    pub fn replacer(&self) -> Result<SearchAndReplace> {
        let mut sar = SearchAndReplace::new();
        for entry in &self.replace {
            sar.add_replacement(&entry.original, &entry.replacement)?;
        }
        sar.build();
        Ok(sar)
    }

    /// Build one automaton over every keyword in the profile
    ///
    /// A keyword listed more than once keeps the last target, in the order
    /// replacements, chained groups, blacklist.
    pub fn scanner(&self) -> Result<Automaton<Arc<Target>>> {
        let mut automaton = Automaton::new();

        for entry in &self.replace {
            let target = Arc::new(Target::Replace {
                replacement: entry.replacement.clone(),
            });
            automaton.add(&entry.original, target)?;
        }

        for group in self.chained_groups()? {
            for link in &group.links {
                let target = Arc::new(Target::Link {
                    group: group.name.clone(),
                    url: link.url.clone(),
                });
                for keyword in &link.keywords {
                    automaton.add(keyword, Arc::clone(&target))?;
                }
            }
        }

        let blacklist = Arc::new(Target::Blacklist);
        for keyword in &self.blacklist {
            automaton.add(keyword, Arc::clone(&blacklist))?;
        }

        automaton.build();
        Ok(automaton)
    }

    /// Number of link entries across all groups
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

impl KeywordLinker {
    /// Assemble a linker from a profile
    ///
    /// Each chained group becomes an inherited source; the blacklist is the
    /// linker's own dictionary.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let mut builder = KeywordLinker::builder();
        for group in profile.chained_groups()? {
            builder = builder.inherit(group.linker());
        }
        for keyword in &profile.blacklist {
            builder = builder.blacklist_keyword(keyword);
        }
        Ok(builder.build())
    }
}

impl SearchAndReplace {
    /// Build the dictionary described by a profile
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        profile.replacer()
    }
}
