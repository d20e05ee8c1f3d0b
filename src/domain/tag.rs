use crate::domain::version::Version;
use crate::error::{DotverError, Result};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Whether the pattern adds anything around the bare version
    pub fn is_bare(&self) -> bool {
        self.pattern == PLACEHOLDER
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(tag))
    }

    /// Pull the version out of a tag that matches this pattern.
    ///
    /// Returns `Ok(None)` when the tag does not match; a matching tag whose
    /// version part is malformed is an error.
    pub fn extract(&self, tag: &str) -> Result<Option<Version>> {
        match self.regex()?.captures(tag) {
            Some(caps) => Version::parse(&caps[1]).map(Some),
            None => Ok(None),
        }
    }

    fn regex(&self) -> Result<Regex> {
        if !self.pattern.contains(PLACEHOLDER) {
            return Err(DotverError::tag(format!(
                "Pattern '{}' must contain {} placeholder",
                self.pattern, PLACEHOLDER
            )));
        }

        // Escape everything, then widen {version} to any dotted token so that
        // malformed versions surface as IncorrectVersion rather than a mismatch
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replacen(r"\{version\}", r"([^\s]+?)", 1);

        Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| DotverError::tag(format!("Invalid pattern '{}': {}", self.pattern, e)))
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new(PLACEHOLDER)
    }
}
