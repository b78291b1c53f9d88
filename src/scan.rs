//! @acp:module "Scanner"
//! @acp:summary "Walks a source tree and extracts TODO items in parallel"
//! @acp:domain cli
//! @acp:layer service
//!
//! Files are enumerated with `walkdir`, filtered by the include/exclude globs
//! (matched against the root-relative path), and handed to the adapter
//! registry on the rayon pool. Items carry root-relative paths.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use glob::{MatchOptions, Pattern};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, TodoError};
use crate::extract::AdapterRegistry;
use crate::item::TodoItem;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A file that could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// @acp:summary "Result of one scan"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub root: PathBuf,
    pub scanned_at: DateTime<Utc>,
    /// Files claimed by an adapter, including ones that failed to read
    pub files_scanned: usize,
    pub items: Vec<TodoItem>,
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// @acp:summary "Source tree scanner with glob filtering"
pub struct Scanner {
    registry: AdapterRegistry,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    workers: Option<usize>,
}

impl Scanner {
    /// Build a scanner from configuration (defaults, adapter order, filters)
    pub fn new(config: &Config) -> Result<Self> {
        let registry = AdapterRegistry::with_order(config.defaults, &config.adapters);
        Self::with_registry(config, registry)
    }

    /// Build a scanner around a caller-supplied registry
    pub fn with_registry(config: &Config, registry: AdapterRegistry) -> Result<Self> {
        let include = compile(&config.filters.include)?;
        let exclude = compile(&config.filters.exclude)?;
        Ok(Self {
            registry,
            include,
            exclude,
            workers: config.scan.workers,
        })
    }

    /// @acp:summary "Scan a directory tree, or a single file"
    /// @acp:ai-careful "Extraction runs in parallel"
    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        let metadata = std::fs::metadata(root).map_err(|e| TodoError::read(root, e))?;
        let scanned_at = Utc::now();

        if metadata.is_file() {
            return Ok(self.scan_file(root, scanned_at));
        }

        let files = self.find_files(root);
        tracing::debug!("{} candidate files under {}", files.len(), root.display());

        let results = match self.workers {
            Some(workers) => rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| TodoError::Other(format!("Failed to build thread pool: {}", e)))?
                .install(|| self.extract_all(root, &files)),
            None => self.extract_all(root, &files),
        };

        let mut report = ScanReport {
            root: root.to_path_buf(),
            scanned_at,
            files_scanned: results.len(),
            items: Vec::new(),
            failures: Vec::new(),
        };
        for (path, result) in results {
            collect(&mut report, path, result);
        }

        Ok(report)
    }

    fn scan_file(&self, path: &Path, scanned_at: DateTime<Utc>) -> ScanReport {
        let mut report = ScanReport {
            root: path.to_path_buf(),
            scanned_at,
            files_scanned: 0,
            items: Vec::new(),
            failures: Vec::new(),
        };
        match self.registry.extract(path) {
            Some(result) => {
                report.files_scanned = 1;
                collect(&mut report, path.to_path_buf(), result);
            }
            None => tracing::debug!("No adapter for {}", path.display()),
        }
        report
    }

    /// Root-relative paths of files passing the filters, in walk order
    fn find_files(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(root).ok()?.to_path_buf();
                let candidate = relative.to_string_lossy().replace('\\', "/");

                let included = self.include.is_empty()
                    || self.include.iter().any(|p| p.matches_with(&candidate, MATCH_OPTIONS));
                let excluded = self
                    .exclude
                    .iter()
                    .any(|p| p.matches_with(&candidate, MATCH_OPTIONS));

                (included && !excluded).then_some(relative)
            })
            .collect()
    }

    fn extract_all(
        &self,
        root: &Path,
        files: &[PathBuf],
    ) -> Vec<(PathBuf, Result<Vec<TodoItem>>)> {
        files
            .par_iter()
            .filter_map(|relative| {
                let result = self.registry.extract_as(&root.join(relative), relative)?;
                Some((relative.clone(), result))
            })
            .collect()
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(TodoError::from))
        .collect()
}

fn collect(report: &mut ScanReport, path: PathBuf, result: Result<Vec<TodoItem>>) {
    match result {
        Ok(items) => report.items.extend(items),
        Err(e) => {
            tracing::warn!("{}", e);
            report.failures.push(FileFailure {
                path,
                error: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str, content: &str) {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_uses_relative_paths_and_filters() {
        let dir = TempDir::new().unwrap();
        write(&dir, "src/Main.java", "class A {\n  // TODO: one\n}\n");
        write(&dir, "target/gen/Gen.java", "// TODO: generated\n");
        write(&dir, "logo.png", "TODO: not source\n");

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].file_path(), Path::new("src/Main.java"));
        assert_eq!(report.items[0].line_number(), 2);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_include_filter_restricts_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.py", "# TODO: python\n");
        write(&dir, "b.sh", "# TODO: shell\n");

        let mut config = Config::default();
        config.filters.include = vec!["**/*.py".into()];

        let report = Scanner::new(&config).unwrap().scan(dir.path()).unwrap();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].description(), "python");
    }

    #[test]
    fn test_worker_pool() {
        let dir = TempDir::new().unwrap();
        for i in 0..5 {
            write(&dir, &format!("f{}.rs", i), "// TODO: x\n");
        }
        let mut config = Config::default();
        config.scan.workers = Some(2);

        let report = Scanner::new(&config).unwrap().scan(dir.path()).unwrap();
        assert_eq!(report.items.len(), 5);
    }

    #[test]
    fn test_single_file_root() {
        let dir = TempDir::new().unwrap();
        write(&dir, "main.go", "package main\n// TODO: go\n");

        let path = dir.path().join("main.go");
        let report = Scanner::new(&Config::default()).unwrap().scan(&path).unwrap();
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.items[0].file_path(), path.as_path());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Scanner::new(&Config::default())
            .unwrap()
            .scan(&dir.path().join("nope"));
        assert!(matches!(result, Err(TodoError::Read { .. })));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.rs", "// TODO: x | priority: high\n");
        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filesScanned"], 1);
        assert_eq!(json["items"][0]["priority"], "high");
        assert!(json["scannedAt"].is_string());
    }
}
