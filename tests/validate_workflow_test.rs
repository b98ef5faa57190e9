// tests/validate_workflow_test.rs
use git2::{Repository, Signature};
use release_hygiene::cli::{run_validate, Backend, ValidateArgs};
use release_hygiene::git::{latest_tag, Git2TagSource, GitCommandTagSource, MockTagSource, TagSource};
use release_hygiene::outcome::ValidationOutcome;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_version(root: &Path, version: &str) -> ValidateArgs {
    fs::write(
        root.join("__version__.py"),
        format!("__version__ = \"{}\"\n", version),
    )
    .unwrap();
    ValidateArgs {
        repo_root: root.to_path_buf(),
        version_file: PathBuf::from("__version__.py"),
        tag_pattern: "v*".to_string(),
    }
}

/// Creates a repository with one commit and the given lightweight tags.
fn repo_with_tags(tags: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("README.md"), "demo\n").unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("README.md")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    let commit = repo.find_object(commit_id, None).unwrap();

    for tag in tags {
        repo.tag_lightweight(tag, &commit, false).unwrap();
    }
    dir
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_greater_version_passes() {
    let dir = TempDir::new().unwrap();
    let args = write_version(dir.path(), "1.2.0");
    let outcome = run_validate(&args, &MockTagSource::with_tags(["v1.1.0"])).unwrap();
    assert!(outcome.passed());
    assert_eq!(outcome.previous(), Some("1.1.0"));
}

#[test]
fn test_same_version_fails() {
    let dir = TempDir::new().unwrap();
    let args = write_version(dir.path(), "1.1.0");
    let outcome = run_validate(&args, &MockTagSource::with_tags(["v1.1.0"])).unwrap();
    assert!(!outcome.passed());
    assert!(outcome.to_string().contains("make version-bump-minor"));
}

#[test]
fn test_no_tags_passes() {
    let dir = TempDir::new().unwrap();
    let args = write_version(dir.path(), "0.1.0");
    let outcome = run_validate(&args, &MockTagSource::default()).unwrap();
    assert!(matches!(outcome, ValidationOutcome::FirstRelease { .. }));
    assert!(outcome.passed());
}

#[test]
fn test_non_release_tags_are_ignored() {
    let dir = TempDir::new().unwrap();
    let args = write_version(dir.path(), "1.0.0");
    let source = MockTagSource::with_tags(["nightly-2024", "v0.9.0"]);
    let outcome = run_validate(&args, &source).unwrap();
    assert_eq!(outcome.previous(), Some("0.9.0"));
}

#[test]
fn test_git2_sorts_by_version() {
    let dir = repo_with_tags(&["v1.9.0", "v1.10.0", "v1.2.0", "other"]);
    let source = Git2TagSource::new(dir.path());

    assert_eq!(
        source.list_tags("v*").unwrap(),
        vec!["v1.10.0", "v1.9.0", "v1.2.0"]
    );
    assert_eq!(latest_tag(&source, "v*"), Some("1.10.0".to_string()));
}

#[test]
fn test_validate_against_git2_repository() {
    let dir = repo_with_tags(&["v1.9.0", "v1.10.0"]);

    let args = write_version(dir.path(), "1.10.1");
    let source = Backend::Git2.tag_source(dir.path());
    assert!(run_validate(&args, source.as_ref()).unwrap().passed());

    let args = write_version(dir.path(), "1.9.5");
    let outcome = run_validate(&args, source.as_ref()).unwrap();
    assert!(matches!(outcome, ValidationOutcome::NotGreater { .. }));
}

#[test]
fn test_git2_repository_without_tags() {
    let dir = repo_with_tags(&[]);
    let args = write_version(dir.path(), "0.0.1");
    let outcome = run_validate(&args, &Git2TagSource::new(dir.path())).unwrap();
    assert!(matches!(outcome, ValidationOutcome::FirstRelease { .. }));
}

#[test]
fn test_command_backend_matches_git2() {
    if !git_available() {
        return;
    }
    let dir = repo_with_tags(&["v0.2.0", "v0.10.0", "v0.3.1"]);
    let command = GitCommandTagSource::new(dir.path());
    let in_process = Git2TagSource::new(dir.path());

    assert_eq!(
        command.list_tags("v*").unwrap(),
        in_process.list_tags("v*").unwrap()
    );
    assert_eq!(latest_tag(&command, "v*"), Some("0.10.0".to_string()));
}

#[test]
fn test_command_backend_outside_repository_is_first_release() {
    let dir = TempDir::new().unwrap();
    let args = write_version(dir.path(), "1.0.0");
    let source = GitCommandTagSource::new(dir.path());
    let outcome = run_validate(&args, &source).unwrap();
    assert!(matches!(outcome, ValidationOutcome::FirstRelease { .. }));
}
