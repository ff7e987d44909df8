//! Workspace context detection
//!
//! Finds the workspace root from any directory and loads the document.
//! This enables git-like behavior where commands work from anywhere
//! inside the workspace.

use std::path::{Path, PathBuf};

use ws_core::WorkspaceResolver;
use ws_fs::{Host, LocalHost, NormalizedPath};

use crate::error::{CliError, Result};

/// Walk up from `start` looking for a directory where `host` has `file`.
pub async fn find_workspace_root<H: Host>(host: &H, start: &Path, file: &str) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if host.exists(&NormalizedPath::new(dir.join(file))).await {
            return Some(dir.to_path_buf());
        }
    }
    None
}

/// Pick the workspace root: the explicit one, or the nearest ancestor of
/// the current directory holding `file`.
pub async fn resolve_root<H: Host>(host: &H, explicit: Option<PathBuf>, file: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    if let Some(root) = explicit {
        return Ok(cwd.join(root));
    }

    find_workspace_root(host, &cwd, file).await.ok_or_else(|| {
        CliError::user(format!(
            "No {file} found in {} or any parent directory",
            cwd.display()
        ))
    })
}

/// Load `file` from `root` through the local file system.
pub async fn load_workspace(root: &Path, file: &str) -> Result<WorkspaceResolver<LocalHost>> {
    tracing::debug!(root = %root.display(), file, "Loading workspace");
    let mut resolver = WorkspaceResolver::new(root, LocalHost::new());
    resolver.load_from_host(file).await?;
    Ok(resolver)
}
