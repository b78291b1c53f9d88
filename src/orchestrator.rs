//! @acp:module "Issue Orchestrator"
//! @acp:summary "Sequential render, duplicate check and submission of items"
//! @acp:domain cli
//! @acp:layer service
//!
//! Items are processed strictly one at a time against a single tracker
//! session. Each tracker call is attempted once. A failure on one item is
//! logged and counted; the run moves on to the next item.

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::error::Result;
use crate::item::TodoItem;
use crate::render::{RenderedIssue, TemplateRenderer};
use crate::tracker::{ExistenceQuery, IssueTracker};

/// Whether issues are actually created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Render and report only; the tracker is asked for duplicates but never mutated
    DryRun,
    /// Create (and assign) issues
    Live,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            RunMode::DryRun
        } else {
            RunMode::Live
        }
    }
}

/// @acp:summary "Per-run outcome counts"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Issues created, or that would be created in a dry run
    pub created: usize,
    /// Items whose issue already exists
    pub skipped: usize,
    /// Items whose duplicate check, creation or assignment failed
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.created + self.skipped + self.failed
    }
}

enum Outcome {
    Created,
    Skipped,
    Failed,
}

/// @acp:summary "Drives items through renderer and tracker"
pub struct IssueOrchestrator<'a, T: IssueTracker + ?Sized> {
    tracker: &'a T,
    renderer: &'a TemplateRenderer,
    show_progress: bool,
}

impl<'a, T: IssueTracker + ?Sized> IssueOrchestrator<'a, T> {
    pub fn new(tracker: &'a T, renderer: &'a TemplateRenderer) -> Self {
        Self {
            tracker,
            renderer,
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr during live runs
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// @acp:summary "Process every item and return the outcome counts"
    /// Dry-run previews are written to `out`. Only a failure to write to
    /// `out` aborts the run.
    pub fn run<W: Write>(
        &self,
        items: &[TodoItem],
        mode: RunMode,
        out: &mut W,
    ) -> Result<RunSummary> {
        let progress = self.progress_bar(items.len(), mode);
        let mut summary = RunSummary::default();

        for item in items {
            progress.set_message(item.description().to_string());
            match self.process(item, mode, out)? {
                Outcome::Created => summary.created += 1,
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Failed => summary.failed += 1,
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        tracing::debug!(
            "Run finished: {} created, {} skipped, {} failed",
            summary.created,
            summary.skipped,
            summary.failed
        );
        Ok(summary)
    }

    fn process<W: Write>(&self, item: &TodoItem, mode: RunMode, out: &mut W) -> Result<Outcome> {
        let issue = self.renderer.render(item);
        let query = ExistenceQuery::new(issue.title(), item.file_path());

        match self.tracker.exists(&query) {
            Ok(true) => {
                tracing::debug!("Issue already exists for {}", location(item));
                return Ok(Outcome::Skipped);
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Duplicate check failed for {}: {}", location(item), e);
                return Ok(Outcome::Failed);
            }
        }

        if mode == RunMode::DryRun {
            write_preview(out, item, &issue)?;
            return Ok(Outcome::Created);
        }

        let handle = match self.tracker.create(&issue) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!("Could not create issue for {}: {}", location(item), e);
                return Ok(Outcome::Failed);
            }
        };
        tracing::info!("Created issue #{} for {}: {}", handle.number, location(item), handle.url);

        if let Some(assignee) = item.assignee() {
            if let Err(e) = self.tracker.assign(&handle, assignee) {
                tracing::warn!("Could not assign #{} to {}: {}", handle.number, assignee, e);
                return Ok(Outcome::Failed);
            }
        }

        Ok(Outcome::Created)
    }

    fn progress_bar(&self, len: usize, mode: RunMode) -> ProgressBar {
        if !self.show_progress || mode == RunMode::DryRun {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
        {
            bar.set_style(style.progress_chars("=>-"));
        }
        bar
    }
}

fn location(item: &TodoItem) -> String {
    format!("{}:{}", item.file_path().display(), item.line_number())
}

fn write_preview<W: Write>(out: &mut W, item: &TodoItem, issue: &RenderedIssue) -> Result<()> {
    writeln!(out, "[DRY RUN] Would create issue: {}", issue.title())?;
    writeln!(out, "  Source: {}", location(item))?;
    if !issue.labels().is_empty() {
        writeln!(out, "  Labels: {}", issue.labels().join(", "))?;
    }
    if let Some(assignee) = item.assignee() {
        writeln!(out, "  Assignee: {}", assignee)?;
    }
    for line in issue.body().lines() {
        writeln!(out, "  | {}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
