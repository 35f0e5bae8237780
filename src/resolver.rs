//! Next tag resolution
//!
//! [`resolve`] turns a [`Config`] and the answer of a [`TagSupplier`] into
//! a [`Resolution`]. It performs no I/O of its own: identical inputs and an
//! identical supplier answer always give the same result.

use crate::config::Config;
use crate::domain::{semantic, Level, SingleNumberVersion, Tag, VersioningScheme};
use crate::error::{NextTagError, Result};
use crate::git::TagSupplier;
use serde::{Deserialize, Serialize};

/// Version every semver repository starts from before its first tag
const SEMVER_SEED: &str = "0.0.0";

/// Current and next tag for a repository
///
/// `next_tag` is always `prefix + next_version`. `current_tag` is empty
/// when no prior tag exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub current_tag: String,
    pub next_tag: String,
    pub next_version: String,
}

impl Resolution {
    fn new(current_tag: Option<String>, prefix: &str, next_version: String) -> Self {
        Resolution {
            current_tag: current_tag.unwrap_or_default(),
            next_tag: Tag::with_prefix(prefix, &next_version).name,
            next_version,
        }
    }
}

/// Settings validated out of a [`Config`]
struct Plan<'a> {
    prefix: &'a str,
    scheme: VersioningScheme,
    level: Level,
    suffix: &'a str,
}

impl<'a> Plan<'a> {
    fn from_config(config: &'a Config) -> Result<Self> {
        let scheme = VersioningScheme::parse(&config.versioning)?;
        let level = Level::parse(&config.level)?;

        if level == Level::PreRelease && config.pre_release_suffix.is_empty() {
            return Err(NextTagError::configuration(format!(
                "There is no pre release suffix for level: {}",
                level
            )));
        }

        Ok(Plan {
            prefix: &config.prefix,
            scheme,
            level,
            suffix: &config.pre_release_suffix,
        })
    }

    /// Next version when the repository has no matching tag yet
    fn first_version(&self) -> Result<String> {
        match self.scheme {
            VersioningScheme::Semver => semantic::increment(SEMVER_SEED, self.level, self.suffix),
            VersioningScheme::SingleNumber => Ok(SingleNumberVersion::initial(
                self.level == Level::PreRelease,
                self.suffix,
            )
            .to_string()),
        }
    }

    /// Next version after `current`, a tag version with the prefix stripped
    fn next_version(&self, current: &str) -> Result<String> {
        match self.scheme {
            VersioningScheme::Semver => {
                if !semantic::valid(current) {
                    return Err(NextTagError::version_format(
                        current,
                        "not a valid semver string",
                    ));
                }
                semantic::increment(current, self.level, self.suffix)
            }
            VersioningScheme::SingleNumber => Ok(SingleNumberVersion::next(
                current,
                self.suffix,
                self.level == Level::PreRelease,
            )?
            .to_string()),
        }
    }
}

/// Compute the current and next tag.
///
/// # Steps
/// 1. Ask `supplier` for the latest tag under `config.prefix`
/// 2. A non-empty `config.force` is returned verbatim as the next version,
///    skipping every check below
/// 3. Validate versioning, level and the prerelease/suffix pairing
/// 4. Without a prior tag, start from the scheme's seed
/// 5. Otherwise strip the prefix and advance the version
///
/// # Errors
/// * [`NextTagError::Configuration`] - Unknown versioning or level, or
///   `prerelease` without a suffix
/// * [`NextTagError::TagFormat`] - The prior tag lacks the prefix
/// * [`NextTagError::VersionFormat`] - The prior version is malformed for
///   the scheme
/// * Whatever the supplier itself fails with
pub fn resolve<S: TagSupplier + ?Sized>(config: &Config, supplier: &S) -> Result<Resolution> {
    let latest = supplier.latest_tag(&config.prefix)?;
    log::debug!(
        "latest tag for prefix '{}': {}",
        config.prefix,
        latest.as_deref().unwrap_or("<none>")
    );

    if let Some(forced) = config.forced_version() {
        log::info!("using forced version {}", forced);
        return Ok(Resolution::new(latest, &config.prefix, forced.to_string()));
    }

    let plan = Plan::from_config(config)?;

    let Some(latest) = latest else {
        let next_version = plan.first_version()?;
        log::info!(
            "no tag found for prefix '{}', starting at {}",
            plan.prefix,
            next_version
        );
        return Ok(Resolution::new(None, plan.prefix, next_version));
    };

    let tag = Tag::new(latest);
    let next_version = plan.next_version(tag.version_part(plan.prefix)?)?;
    log::info!(
        "{} {} -> {}{}",
        plan.scheme,
        tag.name,
        plan.prefix,
        next_version
    );

    Ok(Resolution::new(Some(tag.name), plan.prefix, next_version))
}
