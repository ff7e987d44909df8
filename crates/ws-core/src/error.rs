//! Error types for ws-core

use std::path::PathBuf;

/// Result type for ws-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a workspace
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document was rejected by the schema validator
    #[error(transparent)]
    SchemaValidation(#[from] ws_schema::SchemaValidationError),

    /// An accessor ran before any successful load
    #[error("Workspace has not been loaded yet")]
    NotYetLoaded,

    /// A project-scoped accessor named an unknown project
    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    /// A second load was attempted under [`ReloadPolicy::Reject`](crate::ReloadPolicy::Reject)
    #[error("Workspace is already loaded")]
    AlreadyLoaded,

    /// The stored document is not valid JSON
    #[error("Failed to parse workspace at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Storage host error from ws-fs
    #[error(transparent)]
    Host(#[from] ws_fs::Error),

    /// A validated document that still failed to deserialize
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }
}
