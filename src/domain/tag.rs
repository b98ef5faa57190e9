use crate::error::{HygieneError, Result};
use regex::Regex;

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Version text with a single leading 'v' removed ("v1.2.3" -> "1.2.3")
    pub fn version_text(&self) -> &str {
        self.name.strip_prefix('v').unwrap_or(&self.name)
    }

    /// Ordering key for the tag's version, if it is valid semver
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(self.version_text()).ok()
    }
}

/// Git-style tag glob (e.g., "v*", "release-?.*")
///
/// Supports `*` (any run of characters) and `?` (any single character),
/// matched against the whole tag name like `git tag --list <pattern>`.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
    regex: Regex,
}

impl TagPattern {
    /// Compile a glob into a matcher
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let mut regex_pattern = String::from("^");
        for ch in pattern.chars() {
            match ch {
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                other => regex_pattern.push_str(&regex::escape(&other.to_string())),
            }
        }
        regex_pattern.push('$');

        let regex = Regex::new(&regex_pattern)
            .map_err(|e| HygieneError::config(format!("Invalid tag pattern '{}': {}", pattern, e)))?;
        Ok(TagPattern { pattern, regex })
    }

    /// Whether a tag name matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new() {
        let tag = Tag::new("v1.2.3");
        assert_eq!(tag.name, "v1.2.3");
    }

    #[test]
    fn test_tag_version_text() {
        assert_eq!(Tag::new("v1.2.3").version_text(), "1.2.3");
        assert_eq!(Tag::new("1.2.3").version_text(), "1.2.3");
        // only one prefix character is stripped
        assert_eq!(Tag::new("vv1.2.3").version_text(), "v1.2.3");
    }

    #[test]
    fn test_tag_semver() {
        assert_eq!(
            Tag::new("v1.10.0").semver(),
            Some(semver::Version::new(1, 10, 0))
        );
        assert!(Tag::new("v1.0.0-rc.1").semver().is_some());
        assert!(Tag::new("vnext").semver().is_none());
    }

    #[test]
    fn test_pattern_matches_star() {
        let pattern = TagPattern::new("v*").unwrap();
        assert!(pattern.matches("v1.2.3"));
        assert!(pattern.matches("v"));
        assert!(!pattern.matches("release-1.2.3"));
        assert!(!pattern.matches("1.2.3"));
    }

    #[test]
    fn test_pattern_escapes_regex_characters() {
        let pattern = TagPattern::new("v1.?.0").unwrap();
        assert!(pattern.matches("v1.2.0"));
        assert!(!pattern.matches("v1.22.0"));
        assert!(!pattern.matches("v1x2.0"));
    }
}
