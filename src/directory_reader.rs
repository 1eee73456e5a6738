/// Listing of the base directory.
///
/// Only the immediate children of the base directory are returned; nothing
/// is recursed into.
use crate::error::{OrganizeError, OrganizeResult};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Returns the names of every entry directly inside `base_path`.
///
/// Files and subdirectories are both listed. Entries whose directory record
/// cannot be read are left out.
///
/// # Errors
///
/// * `NotFound` if the path does not exist
/// * `AccessError` if it exists but cannot be inspected or listed
/// * `NotADirectory` if it is not a directory
/// * `EmptyDirectory` if it has no entries
pub fn read_entry_names(base_path: &Path) -> OrganizeResult<Vec<OsString>> {
    let metadata = fs::metadata(base_path).map_err(|e| access_error(base_path, e))?;
    if !metadata.is_dir() {
        return Err(OrganizeError::NotADirectory {
            path: base_path.to_path_buf(),
        });
    }

    let entries = fs::read_dir(base_path).map_err(|e| access_error(base_path, e))?;

    let mut names = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => names.push(entry.file_name()),
            Err(e) => debug!("Skipping unreadable entry in {}: {}", base_path.display(), e),
        }
    }

    if names.is_empty() {
        return Err(OrganizeError::EmptyDirectory {
            path: base_path.to_path_buf(),
        });
    }

    debug!("Found {} entries in {}", names.len(), base_path.display());
    Ok(names)
}

fn access_error(path: &Path, source: std::io::Error) -> OrganizeError {
    if source.kind() == ErrorKind::NotFound {
        OrganizeError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        OrganizeError::AccessError {
            path: path.to_path_buf(),
            source,
        }
    }
}
