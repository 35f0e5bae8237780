use thiserror::Error;

/// Unified error type for git-next-tag operations
#[derive(Error, Debug)]
pub enum NextTagError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Tag format error: expecting provided tag '{tag}' to start with '{prefix}'")]
    TagFormat { tag: String, prefix: String },

    #[error("Version format error: '{version}' {reason}")]
    VersionFormat { version: String, reason: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results in git-next-tag
pub type Result<T> = std::result::Result<T, NextTagError>;

impl NextTagError {
    /// Create a configuration error with context
    pub fn configuration(msg: impl Into<String>) -> Self {
        NextTagError::Configuration(msg.into())
    }

    /// Create a tag format error for a tag missing the configured prefix
    pub fn tag_format(tag: impl Into<String>, prefix: impl Into<String>) -> Self {
        NextTagError::TagFormat {
            tag: tag.into(),
            prefix: prefix.into(),
        }
    }

    /// Create a version format error carrying the offending string
    pub fn version_format(version: impl Into<String>, reason: impl Into<String>) -> Self {
        NextTagError::VersionFormat {
            version: version.into(),
            reason: reason.into(),
        }
    }

    pub fn config_file(msg: impl Into<String>) -> Self {
        NextTagError::ConfigFile(msg.into())
    }
}

impl From<toml::de::Error> for NextTagError {
    fn from(err: toml::de::Error) -> Self {
        NextTagError::ConfigFile(err.to_string())
    }
}
