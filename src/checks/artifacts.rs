//! Checks over binary artifacts, git history and Python sources.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::git::blob_sizes_in_history;
use crate::logo::inspect_logo;
use crate::sanitize::{extract_literals, scan_files};

const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".bmp"];

const APPROVED_LOGO_NAMES: [&str; 6] = [
    "logo.png",
    "logo.jpg",
    "logo.jpeg",
    "./logo/logo.png",
    "./logo/logo.jpg",
    "./logo/logo.jpeg",
];

pub fn logo_file(path: &Path, below_bytes: u64, max_dimension: u32) -> Vec<String> {
    let summary = match inspect_logo(path) {
        Ok(summary) => summary,
        Err(e) => return vec![format!("cannot decode image: {}", e)],
    };

    let mut reasons = Vec::new();
    if summary.file_size >= below_bytes {
        reasons.push(format!(
            "{} bytes, expected under {}",
            summary.file_size, below_bytes
        ));
    }
    if !summary.png {
        reasons.push("not a PNG file".to_string());
    }
    if !summary.rgba {
        reasons.push("not in RGBA mode".to_string());
    }
    if summary.width > max_dimension || summary.height > max_dimension {
        reasons.push(format!(
            "{}x{} exceeds {}x{}",
            summary.width, summary.height, max_dimension, max_dimension
        ));
    }
    if summary.opaque_pixels == 0 {
        reasons.push("no visible pixels".to_string());
    }
    reasons
}

/// `Err(None)` when `repo_root` is not a git repository.
pub fn git_history_blob(
    repo_root: &Path,
    file: &Path,
    below_bytes: u64,
) -> Result<Vec<String>, Option<String>> {
    let blobs = match blob_sizes_in_history(repo_root, file) {
        Ok(blobs) => blobs,
        Err(crate::error::HygieneError::Git(e)) if e.code() == git2::ErrorCode::NotFound => {
            return Err(None)
        }
        Err(e) => return Err(Some(e.to_string())),
    };

    Ok(blobs
        .iter()
        .filter(|blob| blob.size as u64 >= below_bytes)
        .map(|blob| {
            format!(
                "{} in commit {} is {} bytes, expected under {}",
                file.display(),
                &blob.commit[..blob.commit.len().min(8)],
                blob.size,
                below_bytes
            )
        })
        .collect())
}

pub fn test_data(repo_root: &Path, files: &[PathBuf]) -> Vec<String> {
    scan_files(repo_root, files)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// True when a literal names an image file with "logo" in it.
pub fn is_logo_reference(literal: &str) -> bool {
    let lower = literal.to_lowercase();
    lower.contains("logo") && IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// True when a logo reference uses one of the generic file names.
pub fn is_approved_logo_reference(reference: &str) -> bool {
    let normalized = reference.replace('\\', "/").to_lowercase();

    if APPROVED_LOGO_NAMES.contains(&normalized.as_str()) {
        return true;
    }
    if normalized.starts_with("./") && normalized.contains("/logo.") {
        return true;
    }
    !normalized
        .trim_start_matches(|c| c == '.' || c == '/')
        .contains('/')
        && normalized.starts_with("logo.")
}

/// Python files under `dir`, skipping bytecode caches.
pub fn python_sources(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkBuilder::new(dir)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map_or(false, |t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "py"))
        .filter(|path| !path.components().any(|c| c.as_os_str() == "__pycache__"))
        .collect();
    files.sort();
    files
}

pub fn logo_references(dir: &Path) -> Vec<String> {
    let mut reasons = Vec::new();
    for file in python_sources(dir) {
        for literal in extract_literals(&file) {
            if is_logo_reference(&literal) && !is_approved_logo_reference(&literal) {
                reasons.push(format!(
                    "{}: non-generic logo reference '{}'",
                    file.display(),
                    literal
                ));
            }
        }
    }
    reasons
}
