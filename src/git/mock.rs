use crate::domain::TagPattern;
use crate::error::{HygieneError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without a repository or git binary
///
/// Tags are returned in the order given, filtered by the requested glob.
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a source that answers with these tags (already newest first)
    pub fn with_tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source whose every query fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::with_tags(Vec::<String>::new())
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        if let Some(message) = &self.failure {
            return Err(HygieneError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                message.clone(),
            )));
        }

        let pattern = TagPattern::new(pattern)?;
        Ok(self
            .tags
            .iter()
            .filter(|tag| pattern.matches(tag))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_filters_by_pattern() {
        let source = MockTagSource::with_tags(["v2.0.0", "nightly", "v1.0.0"]);
        assert_eq!(source.list_tags("v*").unwrap(), vec!["v2.0.0", "v1.0.0"]);
    }

    #[test]
    fn test_mock_failure() {
        let source = MockTagSource::failing("boom");
        let err = source.list_tags("v*").unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_mock_default_is_empty() {
        assert!(MockTagSource::default().list_tags("*").unwrap().is_empty());
    }
}
