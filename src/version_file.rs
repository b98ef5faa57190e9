//! Reading and rewriting the Python `__version__.py` file.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::domain::SemanticVersion;
use crate::error::{HygieneError, Result};

/// Project name used in the docstring of a freshly written version file.
pub const DEFAULT_PROJECT_NAME: &str = "email-signature-generator";

const VERSION_ASSIGNMENT: &str = r#"__version__\s*=\s*["']([^"']+)["']"#;

/// Reads the version string assigned to `__version__`.
///
/// # Returns
/// * `Ok(String)` - The raw assigned text; it is not validated as semver here
/// * `Err(FileNotFound)` - If the path does not exist
/// * `Err(PatternNotFound)` - If no `__version__ = "..."` assignment is present
pub fn read(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(HygieneError::file_not_found(path));
    }

    let content = fs::read_to_string(path)?;
    let re = Regex::new(VERSION_ASSIGNMENT)
        .map_err(|e| HygieneError::config(format!("version pattern: {}", e)))?;

    re.captures(&content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| HygieneError::PatternNotFound(path.to_path_buf()))
}

/// Renders the fixed version file template.
pub fn render(project_name: &str, version: &SemanticVersion) -> String {
    format!(
        "\"\"\"Version information for {project_name}.\"\"\"\n\
         \n\
         __version__ = \"{version}\"\n\
         __version_info__ = tuple(int(x) for x in __version__.split(\".\"))\n"
    )
}

/// Overwrites the whole file with the fixed template.
///
/// Anything else the file held (comments, extra fields) is lost.
pub fn write(path: &Path, project_name: &str, version: &SemanticVersion) -> Result<()> {
    fs::write(path, render(project_name, version))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_double_quotes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("__version__.py");
        fs::write(&path, "__version__ = \"1.4.2\"\n").unwrap();
        assert_eq!(read(&path).unwrap(), "1.4.2");
    }

    #[test]
    fn test_read_single_quotes_and_spacing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("__version__.py");
        fs::write(&path, "# header\n__version__='0.0.9'\nother = 1\n").unwrap();
        assert_eq!(read(&path).unwrap(), "0.0.9");
    }

    #[test]
    fn test_read_returns_malformed_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("__version__.py");
        fs::write(&path, "__version__ = \"1.2\"\n").unwrap();
        assert_eq!(read(&path).unwrap(), "1.2");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read(&dir.path().join("missing.py"));
        assert!(matches!(result, Err(HygieneError::FileNotFound(_))));
    }

    #[test]
    fn test_read_without_assignment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("__version__.py");
        fs::write(&path, "VERSION = \"1.0.0\"\n").unwrap();
        assert!(matches!(read(&path), Err(HygieneError::PatternNotFound(_))));
    }

    #[test]
    fn test_render_template() {
        let rendered = render("demo", &SemanticVersion::new(2, 0, 1));
        assert_eq!(
            rendered,
            "\"\"\"Version information for demo.\"\"\"\n\n__version__ = \"2.0.1\"\n__version_info__ = tuple(int(x) for x in __version__.split(\".\"))\n"
        );
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("__version__.py");
        fs::write(&path, "# keep me?\n__version__ = \"1.0.0\"\nEXTRA = True\n").unwrap();

        write(&path, DEFAULT_PROJECT_NAME, &SemanticVersion::new(1, 0, 1)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("keep me"));
        assert!(!content.contains("EXTRA"));
        assert!(content.contains("__version__ = \"1.0.1\""));
        assert!(content.contains("email-signature-generator"));
        assert_eq!(read(&path).unwrap(), "1.0.1");
    }
}
