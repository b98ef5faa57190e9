//! Version bump workflow: read, bump, and (unless dry-run) rewrite the version file.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{BumpKind, SemanticVersion};
use crate::error::Result;
use crate::version_file;

/// Arguments for the bump workflow
///
/// Decoupled from clap so the workflow can be driven programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// Repository root the version file path is relative to
    pub repo_root: PathBuf,

    /// Version file, relative to `repo_root`
    pub version_file: PathBuf,

    /// `major`, `minor` or `patch`
    pub bump_kind: String,

    /// Report the new version without writing it
    pub dry_run: bool,

    /// Project name written into the docstring
    pub project_name: String,
}

impl BumpArgs {
    /// Build arguments from configuration.
    pub fn from_config(
        repo_root: impl Into<PathBuf>,
        config: &Config,
        bump_kind: impl Into<String>,
        dry_run: bool,
    ) -> Self {
        BumpArgs {
            repo_root: repo_root.into(),
            version_file: config.version_file.clone(),
            bump_kind: bump_kind.into(),
            dry_run,
            project_name: config.project_name.clone(),
        }
    }

    /// Absolute (or root-relative) location of the version file.
    pub fn version_path(&self) -> PathBuf {
        self.repo_root.join(&self.version_file)
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub previous: SemanticVersion,
    pub next: SemanticVersion,
    /// False for dry runs
    pub written: bool,
    pub path: PathBuf,
}

/// Runs the bump workflow.
///
/// The bump kind is validated before the file is touched, so an invalid kind
/// never rewrites anything.
pub fn run_bump(args: &BumpArgs) -> Result<BumpOutcome> {
    let kind: BumpKind = args.bump_kind.parse()?;
    let path = args.version_path();

    let current = version_file::read(&path)?;
    let previous = SemanticVersion::parse(&current)?;
    let next = previous.bump(kind)?;

    if !args.dry_run {
        version_file::write(&path, &args.project_name, &next)?;
        log::debug!("wrote {} to {}", next, path.display());
    }

    Ok(BumpOutcome {
        previous,
        next,
        written: !args.dry_run,
        path,
    })
}
