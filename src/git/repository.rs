use std::collections::HashSet;
use std::path::{Path, PathBuf};

use git2::{ObjectType, Repository as Git2Repo};

use crate::domain::Tag;
use crate::error::Result;
use crate::git::TagSource;

/// Reads tags in-process with `git2`
///
/// The repository is opened on every query; no handle is kept between calls.
pub struct Git2TagSource {
    repo_root: PathBuf,
}

impl Git2TagSource {
    /// Create a tag source for the repository at `repo_root`
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Git2TagSource {
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let repo = Git2Repo::open(&self.repo_root)?;
        let names = repo.tag_names(Some(pattern))?;
        let mut tags: Vec<String> = names.iter().flatten().map(|s| s.to_string()).collect();
        sort_by_version_desc(&mut tags);
        Ok(tags)
    }
}

/// Sorts tag names newest version first, like `git tag --sort=-version:refname`.
///
/// Names that are not semver (after dropping the `v`) go last, by name.
pub fn sort_by_version_desc(tags: &mut [String]) {
    tags.sort_by(|a, b| {
        let va = Tag::new(a.as_str()).semver();
        let vb = Tag::new(b.as_str()).semver();
        match (va, vb) {
            (Some(va), Some(vb)) => vb.cmp(&va).then_with(|| a.cmp(b)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
}

/// One stored version of a file found while walking history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalBlob {
    /// First commit (in walk order) that holds this blob
    pub commit: String,
    /// Blob size in bytes
    pub size: usize,
}

/// Reports every distinct blob stored at `file` in commits reachable from any ref.
///
/// An empty result means the file never appears in reachable history.
pub fn blob_sizes_in_history(repo_root: &Path, file: &Path) -> Result<Vec<HistoricalBlob>> {
    let repo = Git2Repo::open(repo_root)?;
    let mut revwalk = repo.revwalk()?;
    revwalk.push_glob("*")?;

    let mut seen = HashSet::new();
    let mut blobs = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;
        let tree = commit.tree()?;

        let entry = match tree.get_path(file) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => continue,
            Err(e) => return Err(e.into()),
        };
        if entry.kind() != Some(ObjectType::Blob) || !seen.insert(entry.id()) {
            continue;
        }

        let blob = repo.find_blob(entry.id())?;
        blobs.push(HistoricalBlob {
            commit: oid.to_string(),
            size: blob.size(),
        });
    }

    log::debug!(
        "found {} distinct blob(s) for {} in history",
        blobs.len(),
        file.display()
    );
    Ok(blobs)
}
