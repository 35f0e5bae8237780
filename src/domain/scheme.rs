use crate::error::{NextTagError, Result};
use std::fmt;
use std::str::FromStr;

/// Versioning scheme used to interpret and advance tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersioningScheme {
    /// `MAJOR.MINOR.PATCH[-PRERELEASE]`
    Semver,
    /// A single incrementing integer, optionally `N-<suffix>.<k>`
    SingleNumber,
}

impl VersioningScheme {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for VersioningScheme {
    type Err = NextTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "semver" => Ok(VersioningScheme::Semver),
            "single-number" => Ok(VersioningScheme::SingleNumber),
            other => Err(NextTagError::configuration(format!(
                "unknown versioning '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for VersioningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersioningScheme::Semver => write!(f, "semver"),
            VersioningScheme::SingleNumber => write!(f, "single-number"),
        }
    }
}
