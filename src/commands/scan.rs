//! @acp:module "Scan Command"
//! @acp:summary "List TODO comments found in a source tree"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::item::TodoItem;
use crate::scan::{ScanReport, Scanner};

/// Options for the scan command
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory or file to scan
    pub source: PathBuf,
    /// Print the report as JSON
    pub json: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            json: false,
        }
    }
}

/// Execute the scan command
pub fn execute_scan(options: ScanOptions, config: &Config) -> Result<()> {
    let report = run_scan(&options.source, config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_failures(&report);

    if report.is_empty() {
        println!(
            "{} No TODO comments found ({} files scanned)",
            style("•").dim(),
            report.files_scanned
        );
        return Ok(());
    }

    println!(
        "{} Found {} TODO comments in {} files\n",
        style("✓").green(),
        report.items.len(),
        report.files_scanned
    );
    for item in &report.items {
        println!("  {}", format_item(item));
    }

    Ok(())
}

/// Scan with the configured scanner, adding CLI context to errors
pub(crate) fn run_scan(source: &std::path::Path, config: &Config) -> Result<ScanReport> {
    let scanner = Scanner::new(config).context("Invalid scan configuration")?;
    scanner
        .scan(source)
        .with_context(|| format!("Failed to scan {}", source.display()))
}

pub(crate) fn print_failures(report: &ScanReport) {
    for failure in &report.failures {
        eprintln!(
            "{} Could not read {}: {}",
            style("⚠").yellow(),
            failure.path.display(),
            failure.error
        );
    }
}

/// `src/Main.java:42 [high/bug] Fix null check @alice #safety (3f2a9c01d4e7)`
fn format_item(item: &TodoItem) -> String {
    let mut line = format!(
        "{} {} {}",
        style(format!("{}:{}", item.file_path().display(), item.line_number())).cyan(),
        style(format!("[{}/{}]", item.priority(), item.category())).dim(),
        item.description()
    );
    if let Some(assignee) = item.assignee() {
        line.push_str(&format!(" {}", style(assignee).magenta()));
    }
    for tag in item.tags() {
        line.push_str(&format!(" #{}", tag));
    }
    line.push_str(&format!(" {}", style(format!("({})", item.fingerprint())).dim()));
    line
}
