//! Purge configuration.
//!
//! Settings are layered, lowest precedence first: built-in defaults, the
//! TOML config file, `CACHEPURGE_*` environment variables, command-line flags.
//! Resolution is a pure function of those inputs; reading them happens in
//! [`loader`].

pub mod loader;
mod size;

pub use loader::{load_file_config, parse_file_config, DEFAULT_CONFIG_FILE};
pub use size::parse_size;

use crate::core::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Cache root used when nothing else is configured
pub const DEFAULT_CACHE_DIR: &str = "/tmp/cache";

/// Budget used when nothing else is configured (40 MiB)
pub const DEFAULT_MAX_SIZE: u64 = 40 * 1024 * 1024;

pub const ENV_CACHE_DIR: &str = "CACHEPURGE_DIR";
pub const ENV_MAX_SIZE: &str = "CACHEPURGE_MAX_SIZE";

const ENV_PREFIX: &str = "CACHEPURGE_";

/// Fully resolved settings for one purge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeConfig {
    pub cache_directory: PathBuf,
    /// Maximum total file size in bytes
    pub max_size: u64,
    /// Record removals instead of performing them
    pub dry_run: bool,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            cache_directory: PathBuf::from(DEFAULT_CACHE_DIR),
            max_size: DEFAULT_MAX_SIZE,
            dry_run: false,
        }
    }
}

impl PurgeConfig {
    pub fn new(cache_directory: impl Into<PathBuf>, max_size: u64) -> Self {
        Self {
            cache_directory: cache_directory.into(),
            max_size,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A size as written in the config file: either a byte count or a size string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeSetting {
    Bytes(u64),
    Text(String),
}

impl SizeSetting {
    pub fn to_bytes(&self) -> Result<u64> {
        match self {
            Self::Bytes(n) => Ok(*n),
            Self::Text(s) => parse_size(s),
        }
    }
}

/// Contents of a `cachepurge.toml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub cache_directory: Option<PathBuf>,
    #[serde(default)]
    pub max_size: Option<SizeSetting>,
}

/// Environment variable snapshot for configuration resolution
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSnapshot {
    /// Map of environment variable names to values
    pub vars: HashMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Capture the `CACHEPURGE_*` variables of the current process
    pub fn from_current_env() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Keep the `CACHEPURGE_*` pairs. Other variables are never decoded, so
    /// unrelated non-UTF-8 entries in the environment are harmless.
    fn from_os_pairs(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let vars = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                if !key.starts_with(ENV_PREFIX) {
                    return None;
                }
                match value.into_string() {
                    Ok(value) => Some((key, value)),
                    Err(_) => {
                        log::warn!("Ignoring {}: value is not valid UTF-8", key);
                        None
                    }
                }
            })
            .collect();
        Self { vars }
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get environment variable value, treating empty as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cache_directory: Option<PathBuf>,
    pub max_size: Option<String>,
    pub dry_run: bool,
}

/// Merge every configuration layer into a [`PurgeConfig`]
pub fn resolve_config(
    file: Option<&FileConfig>,
    env: &EnvironmentSnapshot,
    overrides: &ConfigOverrides,
) -> Result<PurgeConfig> {
    let mut config = PurgeConfig::default();

    if let Some(file) = file {
        if let Some(dir) = &file.cache_directory {
            config.cache_directory = dir.clone();
        }
        if let Some(size) = &file.max_size {
            config.max_size = size.to_bytes()?;
        }
    }

    if let Some(dir) = env.get(ENV_CACHE_DIR) {
        config.cache_directory = PathBuf::from(dir);
    }
    if let Some(size) = env.get(ENV_MAX_SIZE) {
        config.max_size = parse_size(size)?;
    }

    if let Some(dir) = &overrides.cache_directory {
        config.cache_directory = dir.clone();
    }
    if let Some(size) = &overrides.max_size {
        config.max_size = parse_size(size)?;
    }
    config.dry_run = overrides.dry_run;

    Ok(config)
}
