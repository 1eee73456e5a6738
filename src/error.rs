//! Error types for configuration and directory organization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building an [`OrganizeConfig`](crate::config::OrganizeConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No base directory was given, or it was an empty string.
    #[error("Please specify a directory with --dir <path>")]
    MissingDirectory,
}

/// Errors that can occur while organizing a directory.
///
/// The first four variants abort a run before anything is moved. The
/// destination variants only abandon a single extension group.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The base directory does not exist.
    #[error("Directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The base directory exists but could not be opened or listed.
    #[error("Cannot access {}: {source}", path.display())]
    AccessError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The base path resolves to something other than a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The base directory has no entries at all.
    #[error("{} does not contain any files", path.display())]
    EmptyDirectory { path: PathBuf },

    /// Failed to create an extension directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to stat an extension directory after opening or creating it.
    #[error("Failed to inspect directory {}: {source}", path.display())]
    DestinationStatFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Something other than a directory already sits at the destination path.
    #[error("Cannot move files into {}: path exists and is not a directory", path.display())]
    DestinationNotADirectory { path: PathBuf },
}

impl OrganizeError {
    /// Returns true for conditions that are informational rather than failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyDirectory { .. })
    }
}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory_is_informational() {
        let err = OrganizeError::EmptyDirectory {
            path: PathBuf::from("/tmp/empty"),
        };
        assert!(err.is_informational());
        assert_eq!(err.to_string(), "/tmp/empty does not contain any files");
    }

    #[test]
    fn test_path_errors_are_not_informational() {
        let err = OrganizeError::NotADirectory {
            path: PathBuf::from("/tmp/file.txt"),
        };
        assert!(!err.is_informational());
        assert_eq!(err.to_string(), "/tmp/file.txt is not a directory");
    }

    #[test]
    fn test_config_error_converts() {
        let err: OrganizeError = ConfigError::MissingDirectory.into();
        assert!(matches!(
            err,
            OrganizeError::Config(ConfigError::MissingDirectory)
        ));
        assert!(err.to_string().contains("--dir"));
    }
}
