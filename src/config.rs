use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "nexttag.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".nexttag.toml";

/// Inputs to a single next-tag computation.
///
/// `versioning` and `level` are kept as given and parsed by the resolver,
/// so an unknown value surfaces as a configuration error at resolve time
/// and `force` can bypass the check entirely.
///
/// | field | default |
/// |---|---|
/// | `prefix` | `"v"` |
/// | `versioning` | `"semver"` (or `"single-number"`) |
/// | `force` | none |
/// | `pre_release_suffix` | `""` |
/// | `level` | `"patch"` |
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_versioning")]
    pub versioning: String,

    #[serde(default)]
    pub force: Option<String>,

    #[serde(default)]
    pub pre_release_suffix: String,

    #[serde(default = "default_level")]
    pub level: String,
}

fn default_prefix() -> String {
    "v".to_string()
}

fn default_versioning() -> String {
    "semver".to_string()
}

fn default_level() -> String {
    "patch".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            versioning: default_versioning(),
            force: None,
            pre_release_suffix: String::new(),
            level: default_level(),
        }
    }
}

/// Values given on the command line, each replacing the loaded one when set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub prefix: Option<String>,
    pub versioning: Option<String>,
    pub force: Option<String>,
    pub pre_release_suffix: Option<String>,
    pub level: Option<String>,
}

impl Config {
    /// Apply command line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(prefix) = overrides.prefix {
            self.prefix = prefix;
        }
        if let Some(versioning) = overrides.versioning {
            self.versioning = versioning;
        }
        if let Some(force) = overrides.force {
            self.force = Some(force);
        }
        if let Some(suffix) = overrides.pre_release_suffix {
            self.pre_release_suffix = suffix;
        }
        if let Some(level) = overrides.level {
            self.level = level;
        }
        self
    }

    /// The forced version, if one is set and non-empty
    pub fn forced_version(&self) -> Option<&str> {
        self.force.as_deref().filter(|f| !f.is_empty())
    }
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nexttag.toml` in current directory
/// 3. `.nexttag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        log::debug!("loading config from {}", path);
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        log::debug!("loading config from ./{}", LOCAL_CONFIG_FILE);
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            log::debug!("loading config from {}", config_path.display());
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
