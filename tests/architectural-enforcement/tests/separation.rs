//! Separation-of-concerns checks over the workspace sources.
//!
//! The core crate must stay headless: a surface dependency creeping into
//! `booklet/core` would silently couple the state machine to one renderer.
//! And nothing in production code may block the event loop with a thread
//! sleep; all timing flows through the tick clock.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn workspace_root() -> PathBuf {
    // tests/architectural-enforcement -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("workspace root")
        .to_path_buf()
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

#[test]
fn core_has_no_terminal_dependencies() {
    let core_src = workspace_root().join("booklet/core/src");
    let mut violations = Vec::new();

    for path in rust_sources(&core_src) {
        let text = fs::read_to_string(&path).expect("readable source");
        for forbidden in ["ratatui", "crossterm"] {
            if text.contains(forbidden) {
                violations.push(format!("{} mentions {}", path.display(), forbidden));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "core must stay headless:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_thread_sleep_in_production_code() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for dir in ["booklet/core/src", "tui/src"] {
        for path in rust_sources(&root.join(dir)) {
            let text = fs::read_to_string(&path).expect("readable source");
            if text.contains("thread::sleep") {
                violations.push(path.display().to_string());
            }
        }
    }

    assert!(
        violations.is_empty(),
        "blocking sleeps found in:\n{}",
        violations.join("\n")
    );
}
