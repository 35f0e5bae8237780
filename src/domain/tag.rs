use crate::error::{NextTagError, Result};

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

    /// Build the tag for a version under the given prefix
    /// Example: prefix="v", version="1.2.3" -> "v1.2.3"
    pub fn with_prefix(prefix: &str, version: &str) -> Self {
        Tag {
            name: format!("{}{}", prefix, version),
        }
    }

    /// Extract the version part by stripping `prefix` (e.g., "v1.2.3" -> "1.2.3")
    ///
    /// Only the exact prefix is removed, once. A tag that does not start
    /// with it is a [`NextTagError::TagFormat`].
    pub fn version_part(&self, prefix: &str) -> Result<&str> {
        self.name
            .strip_prefix(prefix)
            .ok_or_else(|| NextTagError::tag_format(&self.name, prefix))
    }
}
