//! Version validate workflow: the version file must be ahead of the latest release tag.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{is_greater, SemanticVersion};
use crate::error::Result;
use crate::git::{latest_tag, TagSource};
use crate::outcome::ValidationOutcome;
use crate::version_file;

/// Arguments for the validate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Repository root the version file path is relative to
    pub repo_root: PathBuf,

    /// Version file, relative to `repo_root`
    pub version_file: PathBuf,

    /// Glob selecting release tags
    pub tag_pattern: String,
}

impl ValidateArgs {
    /// Build arguments from configuration.
    pub fn from_config(repo_root: impl Into<PathBuf>, config: &Config) -> Self {
        ValidateArgs {
            repo_root: repo_root.into(),
            version_file: config.version_file.clone(),
            tag_pattern: config.tag_pattern.clone(),
        }
    }
}

/// Runs the validate workflow against any tag source.
///
/// Read-only: nothing on disk or in the repository changes.
pub fn run_validate<S: TagSource + ?Sized>(
    args: &ValidateArgs,
    source: &S,
) -> Result<ValidationOutcome> {
    let path = args.repo_root.join(&args.version_file);
    let text = version_file::read(&path)?;
    let current = SemanticVersion::parse(&text)?;

    let Some(previous) = latest_tag(source, &args.tag_pattern) else {
        return Ok(ValidationOutcome::FirstRelease { current });
    };
    log::debug!("latest tag version {}, current {}", previous, current);

    if text == previous {
        return Ok(ValidationOutcome::NotIncremented { previous, current });
    }

    if !is_greater(&text, &previous)? {
        return Ok(ValidationOutcome::NotGreater { previous, current });
    }

    Ok(ValidationOutcome::Incremented { previous, current })
}
