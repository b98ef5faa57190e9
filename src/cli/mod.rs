//! Workflows behind the command-line subcommands
//!
//! Each workflow takes plain argument structs so it can run without clap.

pub mod bump;
pub mod validate;

use std::path::Path;

use crate::git::{Git2TagSource, GitCommandTagSource, TagSource};

pub use bump::{run_bump, BumpArgs, BumpOutcome};
pub use validate::{run_validate, ValidateArgs};

/// How release tags are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    Command,
    /// Read the repository in-process
    Git2,
}

impl Backend {
    /// Build the tag source for `repo_root`.
    pub fn tag_source(self, repo_root: &Path) -> Box<dyn TagSource> {
        match self {
            Backend::Command => Box::new(GitCommandTagSource::new(repo_root)),
            Backend::Git2 => Box::new(Git2TagSource::new(repo_root)),
        }
    }
}
