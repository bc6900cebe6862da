//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! lbranch has two optional, read-only configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$LBRANCH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/lbranch/config.toml`
//! 3. `~/.config/lbranch/config.toml`
//!
//! # Repo Config Location
//!
//! `<git-dir>/lbranch/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use lbranch::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! println!("Showing {} branches", config.count());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::DisplayOptions;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence and defaults. Repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Repository configuration (if present)
    pub repo: Option<FileConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads the repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing config files are not an error.
    pub fn load(git_dir: Option<&Path>) -> Result<Config, ConfigError> {
        let (global, global_path) = match Self::global_config_path() {
            Some(path) => (Self::read_config(&path)?, Some(path)),
            None => (FileConfig::default(), None),
        };

        let repo_path = git_dir
            .map(Self::repo_config_path)
            .filter(|path| path.exists());
        let repo = match &repo_path {
            Some(path) => Some(Self::read_config(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// Locate the global config file, if one exists.
    fn global_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("LBRANCH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("lbranch/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".config/lbranch/config.toml"))
            .filter(|path| path.exists())
    }

    /// Get the path of the repo config for a given git directory.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("lbranch/config.toml")
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn effective(&self) -> FileConfig {
        match &self.repo {
            Some(repo) => self.global.merged_with(repo),
            None => self.global.clone(),
        }
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Number of branches to show.
    ///
    /// Defaults to 5 if not configured.
    pub fn count(&self) -> usize {
        self.effective()
            .count
            .unwrap_or(DisplayOptions::DEFAULT_COUNT)
    }

    /// Whether to hide the currently checked-out branch.
    ///
    /// Defaults to `false` if not configured.
    pub fn exclude_current(&self) -> bool {
        self.effective().exclude_current.unwrap_or(false)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_repo_config(git_dir: &Path, contents: &str) -> PathBuf {
        let path = Config::repo_config_path(git_dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_files() {
        let config = Config::default();
        assert_eq!(config.count(), 5);
        assert!(!config.exclude_current());
        assert!(config.global_config_loaded_from().is_none());
        assert!(config.repo_config_loaded_from().is_none());
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        let path = write_repo_config(temp.path(), "count = 7\nexclude_current = true\n");

        let config = Config::load(Some(temp.path())).unwrap();

        assert_eq!(config.repo.as_ref().unwrap().count, Some(7));
        assert_eq!(config.repo_config_loaded_from(), Some(path.as_path()));
        assert!(config.exclude_current());
    }

    #[test]
    fn missing_repo_config_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(temp.path())).unwrap();
        assert!(config.repo.is_none());
    }

    #[test]
    fn invalid_repo_count_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "count = 0");

        let result = Config::load(Some(temp.path()));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn malformed_repo_config_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "count = \"many\"");

        let result = Config::load(Some(temp.path()));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn precedence_repo_overrides_global() {
        let config = Config {
            global: FileConfig {
                count: Some(10),
                exclude_current: Some(true),
            },
            repo: Some(FileConfig {
                count: Some(3),
                ..Default::default()
            }),
            global_path: None,
            repo_path: None,
        };

        assert_eq!(config.count(), 3);
        assert!(config.exclude_current());
    }
}
