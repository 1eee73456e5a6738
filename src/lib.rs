//! extsort - move the files of a directory into per-extension subdirectories
//!
//! A single pass lists the base directory, keeps its ordinary files, groups
//! them by lower-cased extension and renames each group into
//! `<base>/<extension>`. Files without an extension go to `<base>/unknown`.

pub mod cli;
pub mod config;
pub mod directory_reader;
pub mod error;
pub mod extension_group;
pub mod file_filter;
pub mod file_organizer;
pub mod output;

pub use cli::{Cli, OrganizeReport, organize, run_cli};
pub use config::OrganizeConfig;
pub use error::{ConfigError, OrganizeError, OrganizeResult};
pub use extension_group::{ExtensionGroups, UNKNOWN_EXTENSION, group_by_extension};
pub use file_organizer::{FileOrganizer, GroupReport};
