use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{HygieneError, Result};
use crate::git::TagSource;

/// Lists tags by running the `git` binary
///
/// The child process is awaited with no timeout; a hung `git` hangs the caller.
pub struct GitCommandTagSource {
    program: String,
    repo_root: PathBuf,
}

impl GitCommandTagSource {
    /// Use `git` from `PATH`, running inside `repo_root`
    pub fn new(repo_root: impl AsRef<Path>) -> Self {
        Self::with_program("git", repo_root)
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<String>, repo_root: impl AsRef<Path>) -> Self {
        GitCommandTagSource {
            program: program.into(),
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }
}

impl TagSource for GitCommandTagSource {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .args(["tag", "--list", pattern, "--sort=-version:refname"])
            .current_dir(&self.repo_root)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HygieneError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "{} tag exited with code {}: {}",
                    self.program,
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_tag_listing(&stdout))
    }
}

/// Splits newline-separated `git tag` output, dropping blank lines.
pub fn parse_tag_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
