/// Selection of ordinary files among the base directory's entries.
///
/// Every candidate is opened and stat'ed through the open handle, so links
/// are followed: a link to a file counts as an ordinary file, a link to a
/// directory does not, and a dangling link fails to open.
use log::debug;
use std::ffi::OsString;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Why an entry was left out of the ordinary file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry could not be opened.
    OpenFailed(ErrorKind),
    /// The entry was opened but its metadata could not be read.
    StatFailed(ErrorKind),
    /// The entry is a directory.
    Directory,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::OpenFailed(kind) => write!(f, "could not be opened ({})", kind),
            SkipReason::StatFailed(kind) => write!(f, "could not be inspected ({})", kind),
            SkipReason::Directory => write!(f, "is a directory"),
        }
    }
}

/// An entry that did not make it into the ordinary file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of filtering a directory listing.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Ordinary file paths, in listing order.
    pub files: Vec<PathBuf>,
    /// Entries that were left out.
    pub skipped: Vec<SkippedEntry>,
}

/// Keeps the entries of `base_path` that are ordinary files.
///
/// Each name is joined onto `base_path`, opened and stat'ed. Entries that
/// fail either step, or turn out to be directories, are dropped without
/// aborting; the returned file list is compact and keeps the input order.
pub fn extract_ordinary_files(base_path: &Path, entry_names: &[OsString]) -> FilterOutcome {
    let mut outcome = FilterOutcome {
        files: Vec::with_capacity(entry_names.len()),
        skipped: Vec::new(),
    };

    for name in entry_names {
        let path = base_path.join(name);
        match check_ordinary_file(&path) {
            Ok(()) => outcome.files.push(path),
            Err(reason) => {
                debug!("Skipping {}: {}", path.display(), reason);
                outcome.skipped.push(SkippedEntry { path, reason });
            }
        }
    }

    outcome
}

fn check_ordinary_file(path: &Path) -> Result<(), SkipReason> {
    let file = File::open(path).map_err(|e| SkipReason::OpenFailed(e.kind()))?;
    let metadata = file
        .metadata()
        .map_err(|e| SkipReason::StatFailed(e.kind()))?;
    if metadata.is_dir() {
        return Err(SkipReason::Directory);
    }
    Ok(())
}
