//! Run configuration.
//!
//! The only input to a run is the base directory. It is carried in an
//! [`OrganizeConfig`] that is handed to [`organize`](crate::cli::organize),
//! so the pipeline can be driven from tests without touching process
//! arguments.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Configuration for a single organization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeConfig {
    base_dir: PathBuf,
}

impl OrganizeConfig {
    /// Creates a configuration for the given base directory.
    ///
    /// Only the shape of the value is checked here; the filesystem is not
    /// touched until the run starts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingDirectory` if the path is empty.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base_dir = base_dir.into();
        if base_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingDirectory);
        }
        Ok(Self { base_dir })
    }

    /// The directory whose entries will be organized.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_path() {
        let config = OrganizeConfig::new("/home/user/Downloads").unwrap();
        assert_eq!(config.base_dir(), Path::new("/home/user/Downloads"));
    }

    #[test]
    fn test_empty_path_is_missing_directory() {
        assert_eq!(
            OrganizeConfig::new(""),
            Err(ConfigError::MissingDirectory)
        );
    }

    #[test]
    fn test_new_does_not_require_existing_path() {
        assert!(OrganizeConfig::new("/non/existent/path").is_ok());
    }
}
