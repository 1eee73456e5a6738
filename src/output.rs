//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output: colored status
//! lines, the relocation progress bar and the end-of-run summary table.

use crate::cli::OrganizeReport;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Manages all CLI output with consistent styling and formatting.
///
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Warning messages (yellow with ⚠)
/// - Info messages (cyan)
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use extsort::output::OutputFormatter;
    /// OutputFormatter::success("All files organized");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a progress bar for moving `total` files.
    ///
    /// The bar draws to stderr and stays hidden when stderr is not a
    /// terminal.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Prints a table of moved files per extension, followed by counts of
    /// anything that was left behind.
    pub fn summary_table(report: &OrganizeReport) {
        Self::header("SUMMARY");

        let mut rows: Vec<(&str, usize)> = report
            .groups
            .iter()
            .filter(|group| !group.moved.is_empty())
            .map(|group| (group.extension.as_str(), group.moved.len()))
            .collect();
        rows.sort_by_key(|&(name, _)| name);

        let width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(9); // At least "Extension" width

        println!(
            "{:<width$} | {}",
            "Extension".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (extension, count) in &rows {
            println!(
                "{:<width$} | {} {}",
                extension,
                count.to_string().green(),
                file_word(*count),
                width = width
            );
        }

        let moved = report.moved_count();
        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            moved.to_string().green().bold(),
            file_word(moved),
            width = width
        );

        let unreadable = report.unreadable_count();
        if unreadable > 0 {
            Self::warning(&format!(
                "{} {} could not be read and were skipped",
                unreadable,
                if unreadable == 1 { "entry" } else { "entries" }
            ));
        }
        let failed = report.failed_count();
        if failed > 0 {
            Self::warning(&format!(
                "{} {} could not be moved and stayed in place",
                failed,
                file_word(failed)
            ));
        }
        if !report.failed_groups.is_empty() {
            Self::warning(&format!(
                "{} extension {} could not be organized",
                report.failed_groups.len(),
                if report.failed_groups.len() == 1 { "group" } else { "groups" }
            ));
        }
    }
}

fn file_word(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
