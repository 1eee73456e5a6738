//! Command-line interface module for extsort.
//!
//! This module handles:
//! - Argument parsing (`--dir <path>`)
//! - Orchestration of the read, filter, group and relocate stages
//! - Reporting the outcome of a run

use crate::config::OrganizeConfig;
use crate::directory_reader::read_entry_names;
use crate::error::{OrganizeError, OrganizeResult};
use crate::extension_group::group_by_extension;
use crate::file_filter::{SkipReason, SkippedEntry, extract_ordinary_files};
use crate::file_organizer::{FileOrganizer, GroupReport};
use crate::output::OutputFormatter;
use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use std::path::PathBuf;

/// Move the files of a directory into subdirectories named after their extensions.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The base directory to process.
    #[arg(long, value_name = "PATH")]
    pub dir: PathBuf,
}

impl Cli {
    /// Turns the parsed arguments into a run configuration.
    pub fn into_config(self) -> OrganizeResult<OrganizeConfig> {
        Ok(OrganizeConfig::new(self.dir)?)
    }
}

/// Outcome of a complete organization run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeReport {
    /// The directory that was organized.
    pub base_dir: PathBuf,
    /// Entries that were not treated as ordinary files.
    pub skipped: Vec<SkippedEntry>,
    /// One report per extension group that was relocated.
    pub groups: Vec<GroupReport>,
    /// Extension groups that were abandoned, with the reason.
    pub failed_groups: Vec<(String, String)>,
}

impl OrganizeReport {
    /// Total number of files moved.
    pub fn moved_count(&self) -> usize {
        self.groups.iter().map(|group| group.moved.len()).sum()
    }

    /// Number of files that could not be moved inside relocated groups.
    pub fn failed_count(&self) -> usize {
        self.groups.iter().map(|group| group.failed.len()).sum()
    }

    /// Number of skipped entries that were not directories.
    pub fn unreadable_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|entry| entry.reason != SkipReason::Directory)
            .count()
    }

    /// Returns true if every ordinary file found was moved.
    pub fn is_complete_success(&self) -> bool {
        self.failed_groups.is_empty() && self.groups.iter().all(GroupReport::is_complete_success)
    }
}

/// Organizes the base directory of `config`.
///
/// This function:
/// 1. Lists the immediate entries of the base directory
/// 2. Keeps the ones that are ordinary files
/// 3. Groups them by lower-cased extension
/// 4. Moves each group into `<base>/<extension>`
///
/// # Errors
///
/// Only the listing stage can fail the run: `NotFound`, `AccessError`,
/// `NotADirectory` or `EmptyDirectory`. Nothing has been moved when one of
/// these is returned. Later problems are recorded in the report.
///
/// # Examples
///
/// ```no_run
/// use extsort::cli::organize;
/// use extsort::config::OrganizeConfig;
///
/// let config = OrganizeConfig::new("/path/to/directory").unwrap();
/// match organize(&config) {
///     Ok(report) => println!("Moved {} files", report.moved_count()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn organize(config: &OrganizeConfig) -> OrganizeResult<OrganizeReport> {
    organize_with_progress(config, &ProgressBar::hidden())
}

/// Same as [`organize`], advancing `progress` as files are relocated.
pub fn organize_with_progress(
    config: &OrganizeConfig,
    progress: &ProgressBar,
) -> OrganizeResult<OrganizeReport> {
    let base_path = config.base_dir();

    let entry_names = read_entry_names(base_path)?;
    let filtered = extract_ordinary_files(base_path, &entry_names);
    info!(
        "{} of {} entries in {} are ordinary files",
        filtered.files.len(),
        entry_names.len(),
        base_path.display()
    );

    let groups = group_by_extension(filtered.files);
    let mut report = OrganizeReport {
        base_dir: base_path.to_path_buf(),
        skipped: filtered.skipped,
        ..Default::default()
    };

    progress.set_length(groups.values().map(|files| files.len() as u64).sum());
    for (extension, files) in &groups {
        progress.set_message(format!("{}/", extension));
        match FileOrganizer::relocate_group(base_path, extension, files) {
            Ok(group_report) => report.groups.push(group_report),
            Err(e) => {
                error!("Abandoning extension group '{}': {}", extension, e);
                report.failed_groups.push((extension.clone(), e.to_string()));
            }
        }
        progress.inc(files.len() as u64);
    }
    progress.finish_and_clear();

    Ok(report)
}

/// Runs the CLI application for parsed arguments.
///
/// Prints progress and a summary. The returned error is one of the
/// conditions that stop a run before any file is moved; the caller decides
/// how to report it.
pub fn run_cli(cli: Cli) -> OrganizeResult<OrganizeReport> {
    let config = cli.into_config()?;
    OutputFormatter::info(&format!(
        "Organizing contents of: {}",
        config.base_dir().display()
    ));

    let progress = OutputFormatter::create_progress_bar(0);
    let report = organize_with_progress(&config, &progress)?;

    for (extension, reason) in &report.failed_groups {
        OutputFormatter::error(&format!("Skipped {}/: {}", extension, reason));
    }
    for group in &report.groups {
        for (path, reason) in &group.failed {
            OutputFormatter::warning(&format!("{}: {}", path.display(), reason));
        }
    }

    OutputFormatter::summary_table(&report);

    if report.is_complete_success() {
        OutputFormatter::success("Organization complete!");
    } else {
        OutputFormatter::warning("Some files could not be organized. Please review the messages above.");
    }

    Ok(report)
}

/// Maps the outcome of a run to a process exit code.
///
/// Informational conditions, such as an empty directory, exit with 0.
pub fn exit_code(result: &OrganizeResult<OrganizeReport>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) if e.is_informational() => 0,
        Err(_) => 1,
    }
}

/// Reports an error that stopped a run.
pub fn report_error(err: &OrganizeError) {
    if err.is_informational() {
        OutputFormatter::info(&err.to_string());
    } else {
        OutputFormatter::error(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_dir_flag() {
        let cli = Cli::try_parse_from(["extsort", "--dir", "/tmp/downloads"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("/tmp/downloads"));
    }

    #[test]
    fn test_missing_dir_flag_is_usage_error() {
        let err = Cli::try_parse_from(["extsort"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["extsort", "--dir", "/tmp", "--recursive"]).is_err());
    }

    #[test]
    fn test_empty_dir_flag_is_rejected() {
        assert!(Cli::try_parse_from(["extsort", "--dir", ""]).is_err());

        let cli = Cli { dir: PathBuf::new() };
        assert!(matches!(
            cli.into_config(),
            Err(OrganizeError::Config(ConfigError::MissingDirectory))
        ));
    }

    #[test]
    fn test_exit_codes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = OrganizeConfig::new(temp_dir.path()).unwrap();
        assert_eq!(exit_code(&organize(&config)), 0);

        let missing = OrganizeConfig::new(temp_dir.path().join("missing")).unwrap();
        assert_eq!(exit_code(&organize(&missing)), 1);
    }

    #[test]
    fn test_report_counts() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        fs::write(base.join("a.txt"), "a").unwrap();
        fs::write(base.join("b.rs"), "b").unwrap();
        fs::create_dir(base.join("sub")).unwrap();

        let config = OrganizeConfig::new(base).unwrap();
        let report = organize(&config).unwrap();

        assert_eq!(report.moved_count(), 2);
        assert_eq!(report.failed_count(), 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.unreadable_count(), 0);
        assert!(report.is_complete_success());
    }
}
