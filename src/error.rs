use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for release-hygiene operations
#[derive(Error, Debug)]
pub enum HygieneError {
    #[error("Invalid semantic version format: {0}")]
    InvalidFormat(String),

    #[error("Invalid bump type: {0}. Must be 'major', 'minor', or 'patch'")]
    InvalidBumpKind(String),

    #[error("Version file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not find __version__ in {}", .0.display())]
    PatternNotFound(PathBuf),

    #[error("Invalid logo size: {0} (must be a positive number of pixels)")]
    InvalidLogoSize(u32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rule catalog error: {0}")]
    Rules(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-hygiene
pub type Result<T> = std::result::Result<T, HygieneError>;

impl HygieneError {
    /// Create an invalid version format error
    pub fn invalid_format(value: impl Into<String>) -> Self {
        HygieneError::InvalidFormat(value.into())
    }

    /// Create a missing version file error
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        HygieneError::FileNotFound(path.as_ref().to_path_buf())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HygieneError::Config(msg.into())
    }

    /// Create a rule catalog error with context
    pub fn rules(msg: impl Into<String>) -> Self {
        HygieneError::Rules(msg.into())
    }

    /// Whether this error is one of the anticipated operator mistakes.
    ///
    /// The command line reports these as `Error: ...`; everything else is
    /// reported as an unexpected error. Both exit with status 1.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            HygieneError::InvalidFormat(_)
                | HygieneError::InvalidBumpKind(_)
                | HygieneError::FileNotFound(_)
                | HygieneError::PatternNotFound(_)
        )
    }
}
