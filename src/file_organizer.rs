/// Moving grouped files into their extension directories.
///
/// A group is relocated in two steps: make sure the destination directory
/// exists, then rename each file into it. Destination problems abandon the
/// whole group; a failed rename only leaves that one file where it was.
use crate::error::{OrganizeError, OrganizeResult};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Outcome of relocating one extension group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// The extension the group was keyed by.
    pub extension: String,
    /// The directory files were moved into.
    pub destination: PathBuf,
    /// New paths of the files that were moved.
    pub moved: Vec<PathBuf>,
    /// Files that stayed in place, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl GroupReport {
    fn new(extension: &str, destination: &Path) -> Self {
        Self {
            extension: extension.to_string(),
            destination: destination.to_path_buf(),
            moved: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Returns true if every file of the group was moved.
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Moves files into extension subdirectories of a base directory.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Relocates a group of files into `base_path/extension`.
    ///
    /// The destination directory, and any missing ancestors, are created if
    /// it cannot be opened. Files are then renamed into it one at a time. A
    /// file whose name is already taken in the destination is left in place
    /// rather than overwritten.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryCreationFailed` if the destination could not be
    /// created, and `DestinationNotADirectory` if something other than a
    /// directory already occupies its path. No file is moved in either case.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use extsort::file_organizer::FileOrganizer;
    /// use std::path::{Path, PathBuf};
    ///
    /// let result = FileOrganizer::relocate_group(
    ///     Path::new("/path/to/base"),
    ///     "txt",
    ///     &[PathBuf::from("/path/to/base/notes.txt")],
    /// );
    ///
    /// match result {
    ///     Ok(report) => println!("Moved {} files", report.moved.len()),
    ///     Err(e) => eprintln!("Relocation failed: {}", e),
    /// }
    /// ```
    pub fn relocate_group(
        base_path: &Path,
        extension: &str,
        files: &[PathBuf],
    ) -> OrganizeResult<GroupReport> {
        let destination = base_path.join(extension);
        Self::ensure_directory(&destination)?;

        let mut report = GroupReport::new(extension, &destination);
        for file_path in files {
            match Self::move_file(file_path, &destination) {
                Ok(new_path) => {
                    info!("Moved {} to {}", file_path.display(), new_path.display());
                    report.moved.push(new_path);
                }
                Err(reason) => {
                    warn!("Leaving {} in place: {}", file_path.display(), reason);
                    report.failed.push((file_path.clone(), reason));
                }
            }
        }

        Ok(report)
    }

    /// Makes sure `path` is a directory, creating it if it cannot be opened.
    fn ensure_directory(path: &Path) -> OrganizeResult<()> {
        // An existing non-directory entry must not reach create_dir_all.
        if let Ok(metadata) = fs::symlink_metadata(path) {
            let is_dir = metadata.is_dir() || fs::metadata(path).is_ok_and(|m| m.is_dir());
            if !is_dir {
                return Err(OrganizeError::DestinationNotADirectory {
                    path: path.to_path_buf(),
                });
            }
        }

        if File::open(path).is_err() {
            debug!("Creating directory {}", path.display());
            fs::create_dir_all(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let metadata = fs::metadata(path).map_err(|e| OrganizeError::DestinationStatFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        if !metadata.is_dir() {
            return Err(OrganizeError::DestinationNotADirectory {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    /// Renames one file into `destination`, returning its new path.
    fn move_file(file_path: &Path, destination: &Path) -> Result<PathBuf, String> {
        let file_name = file_path
            .file_name()
            .ok_or_else(|| "file has no name component".to_string())?;
        let new_path = destination.join(file_name);

        // rename(2) silently replaces an existing file.
        if fs::symlink_metadata(&new_path).is_ok() {
            return Err(format!("{} already exists", new_path.display()));
        }

        fs::rename(file_path, &new_path)
            .map_err(|e| format!("failed to move to {}: {}", new_path.display(), e))?;
        Ok(new_path)
    }
}
