//! Workspace resolution for multi-project workspace documents
//!
//! A workspace document declares global settings, three shared tool
//! configurations (`cli`, `schematics`, `architect`) and a map of named
//! projects with their own tool overrides. This crate loads such a
//! document, validates it, and answers queries about it:
//!
//! - **Loading**: from an in-memory JSON value or from a storage [`Host`](ws_fs::Host)
//! - **Validation**: through the [`Validate`](ws_schema::Validate) boundary
//! - **Queries**: version, project listing, project views, tool configs,
//!   default-project inference and path-to-project lookup
//!
//! # Architecture
//!
//! ```text
//!        ws-cli / other tooling
//!                 |
//!              ws-core
//!                 |
//!          +------+------+
//!          |             |
//!        ws-fs       ws-schema
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ws_core::WorkspaceResolver;
//! use ws_fs::LocalHost;
//!
//! let mut resolver = WorkspaceResolver::new("/path/to/workspace", LocalHost::new());
//! let names = resolver
//!     .load_from_host("workspace.json")
//!     .await?
//!     .list_project_names()?;
//! ```

pub mod error;
pub mod workspace;

pub use error::{Error, Result};
pub use workspace::{
    ProjectEntry, ProjectType, ReloadPolicy, ResolverOptions, Tool, ToolConfig,
    WorkspaceDocument, WorkspaceResolver,
};
