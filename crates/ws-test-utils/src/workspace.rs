//! [`TestWorkspace`] builder for on-disk workspace scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary workspace directory with helper methods for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use ws_test_utils::{TestWorkspace, documents};
///
/// let ws = TestWorkspace::new();
/// ws.write_document("workspace.json", &documents::multi_project());
/// ws.create_dir("projects/app/src");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a workspace holding `document` as `workspace.json`.
    pub fn with_document(document: &Value) -> Self {
        let ws = Self::new();
        ws.write_document("workspace.json", document);
        ws
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `document` as pretty JSON, creating parent directories.
    pub fn write_document(&self, relative: &str, document: &Value) {
        let content = serde_json::to_string_pretty(document).unwrap();
        self.write_raw(relative, &content);
    }

    /// Write arbitrary text, creating parent directories.
    pub fn write_raw(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    pub fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }
}
