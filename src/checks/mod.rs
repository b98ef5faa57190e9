//! Declarative documentation and template checks.
//!
//! Rules come from a TOML catalog bundled with the crate (optionally extended
//! from configuration) and are evaluated independently against a repository
//! root.

pub mod artifacts;
pub mod pii;
pub mod rule;
pub mod text;
pub mod yaml;

use std::fmt;
use std::fs;
use std::path::Path;

pub use rule::{default_rules, load_rules, parse_rules, FieldRequirement, Rule, RuleKind};

/// Result of evaluating one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Passed,
    Failed { reasons: Vec<String> },
    /// Optional artifact absent, or nothing to inspect.
    Skipped { reason: String },
}

impl RuleOutcome {
    fn from_reasons(reasons: Vec<String>) -> Self {
        if reasons.is_empty() {
            RuleOutcome::Passed
        } else {
            RuleOutcome::Failed { reasons }
        }
    }

    fn failed(reason: impl Into<String>) -> Self {
        RuleOutcome::Failed {
            reasons: vec![reason.into()],
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RuleOutcome::Failed { .. })
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Passed => write!(f, "passed"),
            RuleOutcome::Failed { reasons } => write!(f, "failed: {}", reasons.join("; ")),
            RuleOutcome::Skipped { reason } => write!(f, "skipped: {}", reason),
        }
    }
}

/// A rule paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub id: String,
    pub description: String,
    pub outcome: RuleOutcome,
}

/// Outcomes of a full catalog run, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub reports: Vec<RuleReport>,
}

impl CheckReport {
    /// True when no rule failed.
    pub fn passed(&self) -> bool {
        !self.reports.iter().any(|r| r.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleReport> {
        self.reports.iter().filter(|r| r.outcome.is_failure())
    }

    /// `(passed, failed, skipped)` counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        self.reports
            .iter()
            .fold((0, 0, 0), |(p, f, s), report| match report.outcome {
                RuleOutcome::Passed => (p + 1, f, s),
                RuleOutcome::Failed { .. } => (p, f + 1, s),
                RuleOutcome::Skipped { .. } => (p, f, s + 1),
            })
    }

    pub fn get(&self, id: &str) -> Option<&RuleReport> {
        self.reports.iter().find(|r| r.id == id)
    }
}

/// Evaluates every rule against `repo_root`.
pub fn run_checks(repo_root: &Path, rules: &[Rule]) -> CheckReport {
    let reports = rules
        .iter()
        .map(|rule| {
            let outcome = run_rule(repo_root, rule);
            log::debug!("rule {}: {}", rule.id, outcome);
            RuleReport {
                id: rule.id.clone(),
                description: rule.description.clone(),
                outcome,
            }
        })
        .collect();
    CheckReport { reports }
}

/// Evaluates a single rule.
pub fn run_rule(repo_root: &Path, rule: &Rule) -> RuleOutcome {
    let path = repo_root.join(&rule.path);

    match &rule.kind {
        RuleKind::GitHistoryBlob { below_bytes } => {
            return match artifacts::git_history_blob(repo_root, &rule.path, *below_bytes) {
                Ok(reasons) => RuleOutcome::from_reasons(reasons),
                Err(None) => RuleOutcome::Skipped {
                    reason: "not a git repository".to_string(),
                },
                Err(Some(e)) => RuleOutcome::failed(e),
            };
        }
        RuleKind::TestData { files } => {
            return RuleOutcome::from_reasons(artifacts::test_data(&path, files));
        }
        RuleKind::LogoReferences => {
            if !path.is_dir() {
                return missing(rule, &path);
            }
            return RuleOutcome::from_reasons(artifacts::logo_references(&path));
        }
        RuleKind::LogoFile {
            below_bytes,
            max_dimension,
        } => {
            if !path.is_file() {
                return missing(rule, &path);
            }
            return RuleOutcome::from_reasons(artifacts::logo_file(
                &path,
                *below_bytes,
                *max_dimension,
            ));
        }
        _ => {}
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return missing(rule, &path),
        Err(e) => return RuleOutcome::failed(format!("cannot read {}: {}", path.display(), e)),
    };

    let reasons = match &rule.kind {
        RuleKind::Exists => {
            if content.trim().is_empty() {
                vec![format!("{} is empty", rule.path.display())]
            } else {
                Vec::new()
            }
        }
        RuleKind::ContainsAny { groups } => text::contains_any(&content, groups),
        RuleKind::ContainsAll { needles } => text::contains_all(&content, needles),
        RuleKind::Absent { needles } => text::absent(&content, needles),
        RuleKind::Count { needle, min } => text::count(&content, needle, *min),
        RuleKind::MatchesAny { patterns } => text::matches_any(&content, patterns),
        RuleKind::MinHeadings { min } => text::min_headings(&content, *min),
        RuleKind::MinSize { bytes, lines } => text::min_size(&content, *bytes, *lines),
        RuleKind::DocumentationPii => pii::scan(&content),
        RuleKind::YamlKeys { .. }
        | RuleKind::YamlEquals { .. }
        | RuleKind::YamlListContains { .. }
        | RuleKind::YamlFields { .. } => match yaml::parse(&content) {
            Ok(doc) => match &rule.kind {
                RuleKind::YamlKeys { keys } => yaml::keys(&doc, keys),
                RuleKind::YamlEquals { key, value } => yaml::equals(&doc, key, value),
                RuleKind::YamlListContains { key, needles } => {
                    yaml::list_contains(&doc, key, needles)
                }
                RuleKind::YamlFields { fields } => yaml::fields(&doc, fields),
                _ => Vec::new(),
            },
            Err(reason) => vec![reason],
        },
        RuleKind::GitHistoryBlob { .. }
        | RuleKind::TestData { .. }
        | RuleKind::LogoReferences
        | RuleKind::LogoFile { .. } => Vec::new(),
    };

    RuleOutcome::from_reasons(reasons)
}

fn missing(rule: &Rule, path: &Path) -> RuleOutcome {
    if rule.optional {
        RuleOutcome::Skipped {
            reason: format!("{} not present", rule.path.display()),
        }
    } else {
        RuleOutcome::failed(format!("{} does not exist", path.display()))
    }
}
