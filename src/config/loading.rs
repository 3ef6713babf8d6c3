use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, ConfigError};

/// Config file names, in order of precedence within one directory
pub const CONFIG_FILES: &[&str] = &[".gherkinfmt.toml", "gherkinfmt.toml", ".config/gherkinfmt.toml"];

/// Prevent runaway traversal on odd filesystems
const MAX_DEPTH: usize = 100;

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        log::debug!("[gherkinfmt-config] Loaded config file: {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Find a config file by traversing up from `start_dir`, stopping at a `.git` boundary.
    pub fn discover_config_upward(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = start_dir.to_path_buf();

        for _ in 0..MAX_DEPTH {
            log::debug!("[gherkinfmt-config] Searching for config in: {}", current_dir.display());

            for config_name in CONFIG_FILES {
                let config_path = current_dir.join(config_name);
                if config_path.is_file() {
                    log::debug!("[gherkinfmt-config] Found config file: {}", config_path.display());
                    return Some(config_path);
                }
            }

            if current_dir.join(".git").exists() {
                log::debug!("[gherkinfmt-config] Stopping at .git directory");
                break;
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => {
                    log::debug!("[gherkinfmt-config] Reached filesystem root");
                    break;
                }
            }
        }

        None
    }

    /// Load configuration, searching upward from `start_dir` unless a path is given or
    /// discovery is skipped. Returns the config together with the file it came from.
    pub fn load_from(
        config_path: Option<&str>,
        start_dir: &Path,
        skip_discovery: bool,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let config = Self::load_file(&path)?;
            return Ok((config, Some(path)));
        }

        if skip_discovery {
            log::debug!("[gherkinfmt-config] Skipping config discovery");
            return Ok((Self::default(), None));
        }

        match Self::discover_config_upward(start_dir) {
            Some(path) => {
                let config = Self::load_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// [`Config::load_from`] starting at the current working directory.
    pub fn load_with_discovery(
        config_path: Option<&str>,
        skip_discovery: bool,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::IoError {
            source,
            path: ".".to_string(),
        })?;
        Self::load_from(config_path, &cwd, skip_discovery)
    }
}
