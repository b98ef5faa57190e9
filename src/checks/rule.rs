use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ChecksConfig;
use crate::error::{HygieneError, Result};

const DEFAULT_RULES: &str = include_str!("default_rules.toml");

/// One declarative check against a repository artifact.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Rule {
    pub id: String,

    /// Artifact relative to the repository root; empty means the root itself.
    #[serde(default)]
    pub path: PathBuf,

    #[serde(default)]
    pub description: String,

    /// A missing artifact skips the rule instead of failing it.
    #[serde(default)]
    pub optional: bool,

    #[serde(flatten)]
    pub kind: RuleKind,
}

/// A required `body` field of an issue form: matched by exact `id`, or by a
/// label containing any of `labels`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldRequirement {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// File exists and is non-empty.
    Exists,
    /// Every group has at least one keyword in the lower-cased content.
    ContainsAny { groups: Vec<Vec<String>> },
    /// Every needle appears verbatim.
    ContainsAll { needles: Vec<String> },
    /// No needle appears verbatim.
    Absent { needles: Vec<String> },
    /// `needle` appears at least `min` times.
    Count { needle: String, min: usize },
    /// At least one regular expression matches.
    MatchesAny { patterns: Vec<String> },
    /// At least `min` Markdown heading lines.
    MinHeadings { min: usize },
    /// At least `bytes` bytes and `lines` lines.
    MinSize {
        #[serde(default)]
        bytes: u64,
        #[serde(default)]
        lines: usize,
    },
    YamlKeys { keys: Vec<String> },
    YamlEquals { key: String, value: String },
    YamlListContains { key: String, needles: Vec<String> },
    YamlFields { fields: Vec<FieldRequirement> },
    /// PNG in RGBA mode, strictly under `below_bytes`, with a visible pixel.
    LogoFile { below_bytes: u64, max_dimension: u32 },
    /// Every blob ever stored at the path is strictly under `below_bytes`.
    GitHistoryBlob { below_bytes: u64 },
    DocumentationPii,
    /// The sanitization scanner finds nothing in `files`.
    TestData { files: Vec<PathBuf> },
    /// Python string literals under the directory name logo images generically.
    LogoReferences,
}

#[derive(Debug, Deserialize)]
struct RuleCatalog {
    #[serde(default, rename = "rule")]
    rules: Vec<Rule>,
}

/// Parses a rule catalog document (`[[rule]]` tables).
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let catalog: RuleCatalog = toml::from_str(text).map_err(|e| HygieneError::rules(e.to_string()))?;
    Ok(catalog.rules)
}

/// The catalog bundled with the crate.
pub fn default_rules() -> Result<Vec<Rule>> {
    parse_rules(DEFAULT_RULES)
}

/// Resolves the rules to run: the bundled catalog unless replaced, plus the
/// configured rules file (relative to `repo_root`).
pub fn load_rules(repo_root: &Path, config: &ChecksConfig) -> Result<Vec<Rule>> {
    let mut rules = if config.replace_defaults {
        Vec::new()
    } else {
        default_rules()?
    };

    if let Some(file) = &config.rules_file {
        let path = repo_root.join(file);
        let text = fs::read_to_string(&path)
            .map_err(|e| HygieneError::rules(format!("Cannot read {}: {}", path.display(), e)))?;
        let extra = toml::from_str::<RuleCatalog>(&text)
            .map_err(|e| HygieneError::rules(format!("{}: {}", path.display(), e)))?
            .rules;
        log::debug!("loaded {} rule(s) from {}", extra.len(), path.display());
        rules.extend(extra);
    }

    if config.replace_defaults && config.rules_file.is_none() {
        return Err(HygieneError::rules(
            "replace_defaults is set but no rules_file is configured",
        ));
    }

    Ok(rules)
}
