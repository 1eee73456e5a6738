//! Grouping of files by extension.
//!
//! The extension of a file is the part of its name after the last `.`,
//! lower-cased. Files without one land in the [`UNKNOWN_EXTENSION`] bucket.
//!
//! # Examples
//!
//! ```
//! use extsort::extension_group::extension_key;
//! use std::path::Path;
//!
//! assert_eq!(extension_key(Path::new("/base/photo.JPG")), "jpg");
//! assert_eq!(extension_key(Path::new("/base/archive.tar.gz")), "gz");
//! assert_eq!(extension_key(Path::new("/base/README")), "unknown");
//! assert_eq!(extension_key(Path::new("/base/.gitignore")), "unknown");
//! ```

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Group name for files that have no extension.
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// Files grouped by extension.
///
/// Groups appear in the order their first file was seen, and files keep
/// their arrival order within a group.
pub type ExtensionGroups = IndexMap<String, Vec<PathBuf>>;

/// Returns the group name for a file path.
///
/// Dot-files such as `.gitignore` and names ending in a dot such as
/// `notes.` have no extension.
pub fn extension_key(path: &Path) -> String {
    // `Path::extension` already treats a leading dot as part of the stem.
    match path.extension() {
        Some(ext) if !ext.is_empty() => ext.to_string_lossy().to_lowercase(),
        _ => UNKNOWN_EXTENSION.to_string(),
    }
}

/// Groups file paths by their lower-cased extension.
pub fn group_by_extension<I>(paths: I) -> ExtensionGroups
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut groups = ExtensionGroups::new();
    for path in paths {
        groups.entry(extension_key(&path)).or_default().push(path);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lower_cased() {
        assert_eq!(extension_key(Path::new("b.TXT")), "txt");
        assert_eq!(extension_key(Path::new("Photo.JpEg")), "jpeg");
    }

    #[test]
    fn test_last_dot_wins() {
        assert_eq!(extension_key(Path::new("backup.tar.gz")), "gz");
        assert_eq!(extension_key(Path::new("v1.2.final.PDF")), "pdf");
    }

    #[test]
    fn test_no_extension_is_unknown() {
        assert_eq!(extension_key(Path::new("README")), UNKNOWN_EXTENSION);
        assert_eq!(extension_key(Path::new("/base/Makefile")), UNKNOWN_EXTENSION);
    }

    #[test]
    fn test_dot_files_are_unknown() {
        assert_eq!(extension_key(Path::new(".gitignore")), UNKNOWN_EXTENSION);
        assert_eq!(extension_key(Path::new("/base/.env")), UNKNOWN_EXTENSION);
    }

    #[test]
    fn test_dot_file_with_extension() {
        assert_eq!(extension_key(Path::new(".config.toml")), "toml");
    }

    #[test]
    fn test_trailing_dot_is_unknown() {
        assert_eq!(extension_key(Path::new("notes.")), UNKNOWN_EXTENSION);
    }

    #[test]
    fn test_dot_in_parent_directory_is_ignored() {
        assert_eq!(
            extension_key(Path::new("/data.d/LICENSE")),
            UNKNOWN_EXTENSION
        );
    }

    #[test]
    fn test_group_by_extension_preserves_order() {
        let groups = group_by_extension(vec![
            PathBuf::from("/base/a.txt"),
            PathBuf::from("/base/c.jpg"),
            PathBuf::from("/base/README"),
            PathBuf::from("/base/b.TXT"),
        ]);

        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups["txt"],
            vec![PathBuf::from("/base/a.txt"), PathBuf::from("/base/b.TXT")]
        );
        assert_eq!(groups["jpg"], vec![PathBuf::from("/base/c.jpg")]);
        assert_eq!(groups[UNKNOWN_EXTENSION], vec![PathBuf::from("/base/README")]);

        let keys: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["txt", "jpg", UNKNOWN_EXTENSION]);
    }

    #[test]
    fn test_group_by_extension_empty() {
        assert!(group_by_extension(Vec::<PathBuf>::new()).is_empty());
    }
}
