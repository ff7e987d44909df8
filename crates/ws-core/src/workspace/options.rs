//! Resolver options

/// Default document name used by [`WorkspaceResolver::load_default`](super::WorkspaceResolver::load_default).
pub const DEFAULT_WORKSPACE_FILE: &str = "workspace.json";

/// What a load does when a snapshot is already cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Validate the new document and replace the snapshot wholesale.
    #[default]
    Replace,
    /// Fail with [`Error::AlreadyLoaded`](crate::Error::AlreadyLoaded) and keep the snapshot.
    Reject,
}

/// Behaviour knobs for a [`WorkspaceResolver`](super::WorkspaceResolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    pub reload: ReloadPolicy,

    /// Document name, relative to the root, read by `load_default`
    pub workspace_file: String,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reload(mut self, reload: ReloadPolicy) -> Self {
        self.reload = reload;
        self
    }

    pub fn with_workspace_file(mut self, workspace_file: impl Into<String>) -> Self {
        self.workspace_file = workspace_file.into();
        self
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            reload: ReloadPolicy::default(),
            workspace_file: DEFAULT_WORKSPACE_FILE.to_string(),
        }
    }
}
