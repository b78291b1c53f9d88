//! Extraction and scanning integration tests
//!
//! Source trees are built in temporary directories and scanned end to end.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use todo_to_issue::extract::adapters::JavaAdapter;
use todo_to_issue::{
    AdapterRegistry, Category, Config, Defaults, Language, Priority, Result, Scanner,
    TodoAdapter, TodoError, TodoItem,
};

fn write(dir: &TempDir, relative: &str, content: impl AsRef<[u8]>) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// =============================================================================
// Annotation scenarios
// =============================================================================

mod annotation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_metadata_annotation() {
        let adapter = JavaAdapter::new(Defaults::default());
        let source = "class A {\n    // todo: Fix null check | priority: high | category: bug | assignee: @alice | tags: safety,urgent\n}\n";

        let items = adapter.extract_source(Path::new("A.java"), source);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.description(), "Fix null check");
        assert_eq!(item.priority(), Priority::High);
        assert_eq!(item.category(), Category::Bug);
        assert_eq!(item.assignee(), Some("@alice"));
        assert_eq!(item.tags().to_vec(), vec!["safety", "urgent"]);
        assert_eq!(item.line_number(), 2);
    }

    #[test]
    fn test_bare_annotation_uses_defaults() {
        let adapter = JavaAdapter::new(Defaults::default());
        let items = adapter.extract_source(Path::new("A.java"), "// todo: Refactor later\n");

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.description(), "Refactor later");
        assert_eq!(item.priority(), Priority::Medium);
        assert_eq!(item.category(), Category::Feature);
        assert_eq!(item.assignee(), None);
        assert!(item.tags().is_empty());
    }

    #[test]
    fn test_configured_defaults_flow_into_items() {
        let defaults = Defaults {
            priority: Priority::Low,
            category: Category::Refactor,
        };
        let adapter = JavaAdapter::new(defaults);
        let items = adapter.extract_source(
            Path::new("A.java"),
            "// TODO: a | priority: someday\n// TODO: b | category: chore\n",
        );

        assert_eq!(items[0].priority(), Priority::Low);
        assert_eq!(items[1].category(), Category::Refactor);
    }

    #[test]
    fn test_unterminated_block_comment_keeps_earlier_items() {
        let adapter = JavaAdapter::new(Defaults::default());
        let source = "// TODO: before\nint x = 1;\n/* TODO: inside\n  still open\n";

        let items = adapter.extract_source(Path::new("A.java"), source);

        let found: Vec<_> = items.iter().map(|i| (i.line_number(), i.description())).collect();
        assert_eq!(found, vec![(1, "before"), (3, "inside")]);
    }
}

// =============================================================================
// Adapter selection
// =============================================================================

mod selection_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct CountingAdapter {
        calls: Arc<AtomicUsize>,
    }

    impl TodoAdapter for CountingAdapter {
        fn language(&self) -> Language {
            Language::Java
        }

        fn supports(&self, path: &Path) -> bool {
            path.extension().is_some_and(|e| e == "java")
        }

        fn extract_source(&self, _path: &Path, _source: &str) -> Vec<TodoItem> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Vec::new()
        }
    }

    #[test]
    fn test_only_first_supporting_adapter_runs() {
        let dir = TempDir::new().unwrap();
        write(&dir, "A.java", "// TODO: x\n");

        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let registry = AdapterRegistry::from_adapters(vec![
            Box::new(CountingAdapter { calls: Arc::clone(&first) }),
            Box::new(CountingAdapter { calls: Arc::clone(&second) }),
        ]);

        let result = registry.extract(&dir.path().join("A.java")).unwrap().unwrap();

        assert!(result.is_empty());
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_configured_order_controls_selection() {
        let dir = TempDir::new().unwrap();
        write(&dir, "notes.md", "TODO: from markdown\n");
        write(&dir, "run.sh", "# TODO: from shell\n");

        let mut config = Config::default();
        config.adapters = vec![Language::Shell];

        let report = Scanner::new(&config).unwrap().scan(dir.path()).unwrap();

        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].description(), "from shell");
    }
}

// =============================================================================
// Custom read step
// =============================================================================

mod custom_read_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Java adapter that tolerates invalid UTF-8 by decoding lossily
    struct LossyJavaAdapter {
        inner: JavaAdapter,
    }

    impl TodoAdapter for LossyJavaAdapter {
        fn language(&self) -> Language {
            Language::Java
        }

        fn supports(&self, path: &Path) -> bool {
            self.inner.supports(path)
        }

        fn extract_source(&self, path: &Path, source: &str) -> Vec<TodoItem> {
            self.inner.extract_source(path, source)
        }

        fn extract(&self, path: &Path, display_path: &Path) -> Result<Vec<TodoItem>> {
            let bytes = fs::read(path).map_err(|e| TodoError::read(display_path, e))?;
            Ok(self.extract_source(display_path, &String::from_utf8_lossy(&bytes)))
        }
    }

    #[test]
    fn test_directory_scan_uses_adapter_read_step() {
        let dir = TempDir::new().unwrap();
        let mut source = b"class A {} // TODO: latin1 \xe9t\xe9\n".to_vec();
        source.extend_from_slice(&[0x2f, 0x2f, 0x20, 0xff, 0x0a]);
        write(&dir, "src/A.java", source);

        let registry = AdapterRegistry::from_adapters(vec![Box::new(LossyJavaAdapter {
            inner: JavaAdapter::new(Defaults::default()),
        })]);
        let report = Scanner::with_registry(&Config::default(), registry)
            .unwrap()
            .scan(dir.path())
            .unwrap();

        assert!(report.failures.is_empty());
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].file_path(), Path::new("src/A.java"));
        assert!(report.items[0].description().starts_with("latin1"));
    }
}

// =============================================================================
// Scanner
// =============================================================================

mod scanner_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_failure_does_not_stop_other_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a/Good.java", "// TODO: good one\n");
        write(&dir, "b/Bad.java", [0x2f, 0x2f, 0x20, 0xff, 0xfe, 0x0a]);
        write(&dir, "c/more.py", "# TODO: python one\n");

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        assert_eq!(report.files_scanned, 3);
        let descriptions: Vec<_> = report.items.iter().map(|i| i.description()).collect();
        assert_eq!(descriptions, vec!["good one", "python one"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, Path::new("b/Bad.java"));
    }

    #[test]
    fn test_items_stay_line_ascending_per_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "src/lib.rs",
            "// TODO: first\nfn a() {}\n/* TODO: second */\nlet s = \"// TODO: not me\";\n// TODO: third\n",
        );

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        let lines: Vec<_> = report.items.iter().map(|i| i.line_number()).collect();
        assert_eq!(lines, vec![1, 3, 5]);
    }

    #[test]
    fn test_excluded_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "node_modules/dep/index.js", "// TODO: vendored\n");
        write(&dir, "src/index.js", "// TODO: ours\n");

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].file_path(), Path::new("src/index.js"));
    }

    #[test]
    fn test_hidden_directories_are_skipped_by_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".github/scripts/release.sh", "# TODO: hidden ci\n");
        write(&dir, ".venv/lib/site.py", "# TODO: hidden venv\n");
        write(&dir, "scripts/release.sh", "# TODO: visible\n");

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        let descriptions: Vec<_> = report.items.iter().map(|i| i.description()).collect();
        assert_eq!(descriptions, vec!["visible"]);
    }

    #[test]
    fn test_tree_without_todos_is_empty_not_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "src/Main.java", "class Main {}\n");

        let report = Scanner::new(&Config::default()).unwrap().scan(dir.path()).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.files_scanned, 1);
        assert!(report.failures.is_empty());
    }
}
