use std::fmt;

use crate::domain::SemanticVersion;

/// Result of comparing the version file against the latest release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// No `v*` tag exists yet
    FirstRelease { current: SemanticVersion },
    /// Current version is strictly greater than the latest tag
    Incremented {
        previous: String,
        current: SemanticVersion,
    },
    /// Current version text is identical to the latest tag
    NotIncremented {
        previous: String,
        current: SemanticVersion,
    },
    /// Current version differs from the latest tag but is not greater
    NotGreater {
        previous: String,
        current: SemanticVersion,
    },
}

impl ValidationOutcome {
    /// True when a release may proceed.
    pub fn passed(&self) -> bool {
        matches!(
            self,
            ValidationOutcome::FirstRelease { .. } | ValidationOutcome::Incremented { .. }
        )
    }

    pub fn current(&self) -> SemanticVersion {
        match self {
            ValidationOutcome::FirstRelease { current }
            | ValidationOutcome::Incremented { current, .. }
            | ValidationOutcome::NotIncremented { current, .. }
            | ValidationOutcome::NotGreater { current, .. } => *current,
        }
    }

    /// Latest tag version with the `v` stripped, if any tag exists.
    pub fn previous(&self) -> Option<&str> {
        match self {
            ValidationOutcome::FirstRelease { .. } => None,
            ValidationOutcome::Incremented { previous, .. }
            | ValidationOutcome::NotIncremented { previous, .. }
            | ValidationOutcome::NotGreater { previous, .. } => Some(previous),
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::FirstRelease { .. } => write!(
                f,
                "No previous version tags found - this appears to be the first release"
            ),
            ValidationOutcome::Incremented { previous, current } => {
                write!(f, "Version incremented from {} to {}", previous, current)
            }
            ValidationOutcome::NotIncremented { previous, .. } => write!(
                f,
                "Version has not been incremented! Current version {} matches the latest tag.\n\
                 Please bump the version using one of:\n  \
                 make version-bump-patch\n  \
                 make version-bump-minor\n  \
                 make version-bump-major",
                previous
            ),
            ValidationOutcome::NotGreater { previous, current } => write!(
                f,
                "Version {} is not properly incremented from {}.\n\
                 Please bump the version using one of:\n  \
                 make version-bump-patch\n  \
                 make version-bump-minor\n  \
                 make version-bump-major",
                current, previous
            ),
        }
    }
}
