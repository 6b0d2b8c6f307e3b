use std::fs;
use std::path::{Path, PathBuf};

use super::FileConfig;
use crate::core::{PurgeError, Result};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "cachepurge.toml";

/// Parse config file contents. `path` is only used for error messages.
pub fn parse_file_config(contents: &str, path: &Path) -> Result<FileConfig> {
    toml::from_str::<FileConfig>(contents)
        .map_err(|e| PurgeError::configuration(path, e.message().to_string()))
}

/// Load a config file that must exist
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PurgeError::configuration(path, format!("failed to read: {}", e)))?;
    let config = parse_file_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load the explicit config file, or `cachepurge.toml` in `dir` if one exists.
pub fn discover_file_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<FileConfig>> {
    if let Some(path) = explicit {
        return load_file_config(path).map(Some);
    }

    let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        load_file_config(&candidate).map(Some)
    } else {
        Ok(None)
    }
}
