//! Single-number versioning
//!
//! Versions are a bare integer `N` (stable) or `N-<suffix>.<k>`, the
//! `k`-th pre-release build of candidate release `N`:
//!
//! ```text
//! Stable(N)        --prerelease--> PreRelease(N + 1, 0)
//! Stable(N)        --other------->  Stable(N + 1)
//! PreRelease(N, k) --prerelease--> PreRelease(N, k + 1)
//! PreRelease(N, k) --other------->  Stable(N)
//! ```
//!
//! Leaving a pre-release at a non-prerelease level ships the candidate
//! as-is: `5-rc.2` becomes `5`, not `6`.

use crate::error::{NextTagError, Result};
use std::fmt;

/// A single-number version, classified against a pre-release suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleNumberVersion {
    Stable(u64),
    PreRelease {
        number: u64,
        suffix: String,
        build: u64,
    },
}

impl SingleNumberVersion {
    /// First version of a repository with no prior tag
    pub fn initial(pre_release: bool, suffix: &str) -> Self {
        if pre_release {
            SingleNumberVersion::PreRelease {
                number: 1,
                suffix: suffix.to_string(),
                build: 0,
            }
        } else {
            SingleNumberVersion::Stable(1)
        }
    }

    /// Compute the version following `current`
    ///
    /// `current` is a pre-release when it contains `-<suffix>`. With an
    /// empty suffix any `-` marks a pre-release.
    pub fn next(current: &str, suffix: &str, pre_release: bool) -> Result<Self> {
        let marker = format!("-{}", suffix);
        let is_pre_release = current.contains(&marker);

        match (is_pre_release, pre_release) {
            (true, false) => Ok(SingleNumberVersion::Stable(leading_integer(current)?)),
            (true, true) => {
                let (number, build) = match current.split_once(&format!("{}.", marker)) {
                    Some((number, counter)) => {
                        let build = parse_integer(counter)?;
                        (number, checked_inc(build, counter)?)
                    }
                    None => {
                        let (number, _) = current.split_once(&marker).unwrap_or((current, ""));
                        (number, 0)
                    }
                };
                Ok(SingleNumberVersion::PreRelease {
                    number: parse_integer(number)?,
                    suffix: suffix.to_string(),
                    build,
                })
            }
            (false, true) => {
                let n = parse_integer(current)?;
                Ok(SingleNumberVersion::PreRelease {
                    number: checked_inc(n, current)?,
                    suffix: suffix.to_string(),
                    build: 0,
                })
            }
            (false, false) => {
                let n = parse_integer(current)?;
                Ok(SingleNumberVersion::Stable(checked_inc(n, current)?))
            }
        }
    }
}

impl fmt::Display for SingleNumberVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleNumberVersion::Stable(n) => write!(f, "{}", n),
            SingleNumberVersion::PreRelease {
                number,
                suffix,
                build,
            } => write!(f, "{}-{}.{}", number, suffix, build),
        }
    }
}

/// Parse the run of digits `s` starts with ("5-rc.2" -> 5)
fn leading_integer(s: &str) -> Result<u64> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    parse_integer(&s[..end]).map_err(|_| NextTagError::version_format(s, "is not a valid number"))
}

fn parse_integer(s: &str) -> Result<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NextTagError::version_format(s, "is not a valid number"));
    }
    s.parse::<u64>()
        .map_err(|e| NextTagError::version_format(s, format!("is not a valid number: {}", e)))
}

fn checked_inc(n: u64, source: &str) -> Result<u64> {
    n.checked_add(1)
        .ok_or_else(|| NextTagError::version_format(source, "cannot be incremented without overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(current: &str, suffix: &str, pre_release: bool) -> String {
        SingleNumberVersion::next(current, suffix, pre_release)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_initial() {
        assert_eq!(SingleNumberVersion::initial(false, "").to_string(), "1");
        assert_eq!(SingleNumberVersion::initial(false, "rc").to_string(), "1");
        assert_eq!(SingleNumberVersion::initial(true, "rc").to_string(), "1-rc.0");
    }

    #[test]
    fn test_stable_to_stable() {
        assert_eq!(next("7", "", false), "8");
        assert_eq!(next("7", "rc", false), "8");
        assert_eq!(next("0", "", false), "1");
    }

    #[test]
    fn test_stable_to_pre_release() {
        assert_eq!(next("7", "rc", true), "8-rc.0");
    }

    #[test]
    fn test_pre_release_advances_build() {
        assert_eq!(next("5-rc.2", "rc", true), "5-rc.3");
        assert_eq!(next("5-rc.0", "rc", true), "5-rc.1");
        assert_eq!(next("5-rc.9", "rc", true), "5-rc.10");
    }

    #[test]
    fn test_pre_release_without_counter_starts_at_zero() {
        assert_eq!(next("5-rc", "rc", true), "5-rc.0");
    }

    #[test]
    fn test_pre_release_promotes_without_increment() {
        assert_eq!(next("5-rc.2", "rc", false), "5");
        assert_eq!(next("5-rc", "rc", false), "5");
    }

    #[test]
    fn test_other_suffix_is_not_a_pre_release() {
        // "-beta" does not match "-rc", so the whole string must be a number
        let err = SingleNumberVersion::next("5-beta.1", "rc", false).unwrap_err();
        assert!(matches!(err, NextTagError::VersionFormat { .. }));
    }

    #[test]
    fn test_empty_suffix_promotes_any_dash() {
        assert_eq!(next("5-rc.2", "", false), "5");
    }

    #[test]
    fn test_invalid_stable_number() {
        for bad in ["abc", "", "7a", "-7", "1.0"] {
            let err = SingleNumberVersion::next(bad, "rc", false).unwrap_err();
            match err {
                NextTagError::VersionFormat { version, .. } => assert_eq!(version, bad),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_promotion_number() {
        let err = SingleNumberVersion::next("abc-rc.1", "rc", false).unwrap_err();
        match err {
            NextTagError::VersionFormat { version, .. } => assert_eq!(version, "abc-rc.1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_build_counter() {
        let err = SingleNumberVersion::next("5-rc.x", "rc", true).unwrap_err();
        match err {
            NextTagError::VersionFormat { version, .. } => assert_eq!(version, "x"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pre_release_number() {
        let err = SingleNumberVersion::next("x-rc.1", "rc", true).unwrap_err();
        match err {
            NextTagError::VersionFormat { version, .. } => assert_eq!(version, "x"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overflow() {
        let max = u64::MAX.to_string();
        assert!(SingleNumberVersion::next(&max, "", false).is_err());
        assert!(SingleNumberVersion::next(&format!("5-rc.{}", max), "rc", true).is_err());
    }
}
