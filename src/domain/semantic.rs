//! Semantic version validation and increment
//!
//! Parsing is delegated to the `semver` crate. Increment follows the rules
//! used by the npm `semver` package (`semver.inc`), which release tooling
//! in CI commonly relies on:
//!
//! - `1.2.3` + patch -> `1.2.4`, while `1.2.4-rc.0` + patch -> `1.2.4`
//! - `1.2.3` + preminor(beta) -> `1.3.0-beta.0`
//! - `1.2.3-beta.0` + prerelease(beta) -> `1.2.3-beta.1`
//! - `1.2.3-beta.1` + prerelease(rc) -> `1.2.3-rc.0`

use crate::domain::Level;
use crate::error::{NextTagError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Parse a semver string, accepting one leading `v` and surrounding whitespace
pub fn parse(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let clean = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(clean).map_err(|e| {
        NextTagError::version_format(version, format!("is not a valid semver string: {}", e))
    })
}

/// Whether `version` is a valid semantic version
pub fn valid(version: &str) -> bool {
    parse(version).is_ok()
}

/// Compute the next version for `level`
///
/// `identifier` is only consulted for the pre-release levels. An empty
/// identifier yields bare numeric pre-releases (`1.0.0-0`).
pub fn increment(version: &str, level: Level, identifier: &str) -> Result<String> {
    let current = parse(version)?;
    let next = bump(&current, level, identifier)?;
    Ok(next.to_string())
}

/// Apply `level` to an already parsed version
pub fn bump(current: &Version, level: Level, identifier: &str) -> Result<Version> {
    let mut next = Version {
        build: BuildMetadata::EMPTY,
        ..current.clone()
    };
    let mut pre = identifiers(&current.pre);

    match level {
        Level::Major => {
            if next.minor != 0 || next.patch != 0 || pre.is_empty() {
                next.major = checked_inc(next.major, current)?;
            }
            next.minor = 0;
            next.patch = 0;
            pre.clear();
        }
        Level::Minor => {
            if next.patch != 0 || pre.is_empty() {
                next.minor = checked_inc(next.minor, current)?;
            }
            next.patch = 0;
            pre.clear();
        }
        Level::Patch => {
            if pre.is_empty() {
                next.patch = checked_inc(next.patch, current)?;
            }
            pre.clear();
        }
        Level::PreMajor => {
            next.major = checked_inc(next.major, current)?;
            next.minor = 0;
            next.patch = 0;
            pre = advance_pre(Vec::new(), identifier, current)?;
        }
        Level::PreMinor => {
            next.minor = checked_inc(next.minor, current)?;
            next.patch = 0;
            pre = advance_pre(Vec::new(), identifier, current)?;
        }
        Level::PrePatch => {
            next.patch = checked_inc(next.patch, current)?;
            pre = advance_pre(Vec::new(), identifier, current)?;
        }
        Level::PreRelease => {
            if pre.is_empty() {
                next.patch = checked_inc(next.patch, current)?;
            }
            pre = advance_pre(pre, identifier, current)?;
        }
    }

    next.pre = Prerelease::new(&pre.join(".")).map_err(|e| {
        NextTagError::configuration(format!(
            "pre-release identifier '{}' is not valid semver: {}",
            identifier, e
        ))
    })?;

    Ok(next)
}

fn identifiers(pre: &Prerelease) -> Vec<String> {
    if pre.is_empty() {
        Vec::new()
    } else {
        pre.as_str().split('.').map(str::to_string).collect()
    }
}

fn is_numeric(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Bump the rightmost numeric identifier (or append `0`), then re-anchor on `identifier`
fn advance_pre(
    mut pre: Vec<String>,
    identifier: &str,
    current: &Version,
) -> Result<Vec<String>> {
    if pre.is_empty() {
        pre.push("0".to_string());
    } else {
        let last_numeric = pre.iter().rposition(|part| is_numeric(part));
        match last_numeric {
            Some(i) => {
                let n = pre[i].parse::<u64>().map_err(|_| {
                    NextTagError::version_format(
                        current.to_string(),
                        format!("has a pre-release counter '{}' that is too large", pre[i]),
                    )
                })?;
                pre[i] = checked_inc(n, current)?.to_string();
            }
            None => pre.push("0".to_string()),
        }
    }

    if identifier.is_empty() {
        return Ok(pre);
    }

    let anchored = pre.first().map(String::as_str) == Some(identifier);
    let counter_numeric = pre.get(1).map(|p| is_numeric(p)).unwrap_or(false);
    if anchored && counter_numeric {
        Ok(pre)
    } else {
        Ok(vec![identifier.to_string(), "0".to_string()])
    }
}

fn checked_inc(n: u64, version: &Version) -> Result<u64> {
    n.checked_add(1).ok_or_else(|| {
        NextTagError::version_format(version.to_string(), "cannot be incremented without overflow")
    })
}
