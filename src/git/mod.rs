//! Git tag inspection abstraction layer
//!
//! The validate workflow only needs one question answered by version control:
//! "which tags match this glob, newest version first?". The [TagSource] trait
//! captures exactly that, so the subprocess-backed implementation can be
//! replaced by an in-process or fake one.
//!
//! - [command::GitCommandTagSource]: shells out to `git tag --list`
//! - [repository::Git2TagSource]: reads tags with the `git2` crate
//! - [mock::MockTagSource]: fixed answers for tests
//!
//! [repository::blob_sizes_in_history] also lives here; it walks history to
//! report every stored version of one file.

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommandTagSource;
pub use mock::MockTagSource;
pub use repository::{blob_sizes_in_history, Git2TagSource, HistoricalBlob};

use crate::domain::Tag;
use crate::error::Result;

/// Source of release tags
pub trait TagSource {
    /// List tags matching a glob (e.g., "v*"), sorted by version descending
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Matching tag names, newest first; may be empty
    /// * `Err` - If the backend could not be queried
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;
}

/// Returns the newest tag's version text (without the `v` prefix).
///
/// A backend failure is treated exactly like "no tags": callers cannot tell
/// an empty repository from an unavailable VCS.
pub fn latest_tag<S: TagSource + ?Sized>(source: &S, pattern: &str) -> Option<String> {
    match source.list_tags(pattern) {
        Ok(tags) => tags
            .into_iter()
            .find(|name| !name.trim().is_empty())
            .map(|name| Tag::new(name.trim()).version_text().to_string()),
        Err(e) => {
            log::debug!("listing tags matching '{}' failed: {}", pattern, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_tag_strips_prefix() {
        let source = MockTagSource::with_tags(["v1.2.0", "v1.1.0"]);
        assert_eq!(latest_tag(&source, "v*"), Some("1.2.0".to_string()));
    }

    #[test]
    fn test_latest_tag_none_when_empty() {
        let source = MockTagSource::with_tags(Vec::<String>::new());
        assert_eq!(latest_tag(&source, "v*"), None);
    }

    #[test]
    fn test_latest_tag_swallows_failure() {
        let source = MockTagSource::failing("fatal: not a git repository");
        assert_eq!(latest_tag(&source, "v*"), None);
    }

    #[test]
    fn test_latest_tag_keeps_unprefixed_name() {
        let source = MockTagSource::with_tags(["2.0.0"]);
        assert_eq!(latest_tag(&source, "*"), Some("2.0.0".to_string()));
    }
}
