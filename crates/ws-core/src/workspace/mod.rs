//! Workspace document model and resolver
//!
//! # Lifecycle
//!
//! 1. **Construct** - fix the root location and storage host
//! 2. **Load** - validate a raw document and cache it as a snapshot
//! 3. **Query** - read from the snapshot; every query except `root` and
//!    `host` fails with [`Error::NotYetLoaded`](crate::Error::NotYetLoaded)
//!    until a load succeeds
//!
//! # Default project
//!
//! The default project is inferred in order:
//!
//! 1. `defaultProject`, when it names an existing project
//! 2. the only project, when the workspace has exactly one
//! 3. none otherwise

mod document;
mod options;
mod resolver;

pub use document::{ProjectEntry, ProjectType, Tool, ToolConfig, WorkspaceDocument};
pub use options::{ReloadPolicy, ResolverOptions};
pub use resolver::WorkspaceResolver;
