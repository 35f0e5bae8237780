use crate::error::{NextTagError, Result};
use std::fmt;
use std::str::FromStr;

/// Requested increment granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
}

impl Level {
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Whether this level produces a pre-release identifier
    pub fn is_pre(&self) -> bool {
        matches!(
            self,
            Level::PreMajor | Level::PreMinor | Level::PrePatch | Level::PreRelease
        )
    }
}

impl FromStr for Level {
    type Err = NextTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Level::Major),
            "minor" => Ok(Level::Minor),
            "patch" => Ok(Level::Patch),
            "premajor" => Ok(Level::PreMajor),
            "preminor" => Ok(Level::PreMinor),
            "prepatch" => Ok(Level::PrePatch),
            "prerelease" => Ok(Level::PreRelease),
            other => Err(NextTagError::configuration(format!(
                "Invalid level name: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
            Level::PreMajor => "premajor",
            Level::PreMinor => "preminor",
            Level::PrePatch => "prepatch",
            Level::PreRelease => "prerelease",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 7] = [
        "major",
        "minor",
        "patch",
        "premajor",
        "preminor",
        "prepatch",
        "prerelease",
    ];

    #[test]
    fn test_level_parse_display_agree() {
        for name in ALL {
            assert_eq!(Level::parse(name).unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_level_parse_invalid() {
        let err = Level::parse("bogus").unwrap_err();
        assert!(matches!(err, NextTagError::Configuration(_)));
        assert_eq!(err.to_string(), "Configuration error: Invalid level name: bogus");
        assert!(Level::parse("").is_err());
        assert!(Level::parse("Patch").is_err());
    }

    #[test]
    fn test_level_is_pre() {
        assert!(!Level::Major.is_pre());
        assert!(!Level::Minor.is_pre());
        assert!(!Level::Patch.is_pre());
        assert!(Level::PreMajor.is_pre());
        assert!(Level::PreMinor.is_pre());
        assert!(Level::PrePatch.is_pre());
        assert!(Level::PreRelease.is_pre());
    }
}
