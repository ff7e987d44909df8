//! The workspace resolver
//!
//! `WorkspaceResolver` owns a fixed root and storage host, plus at most one
//! validated snapshot. Loads replace the snapshot wholesale (or are refused,
//! depending on [`ReloadPolicy`]); queries only ever read it.

use std::sync::Arc;

use serde_json::Value;
use ws_fs::{Host, NormalizedPath};
use ws_schema::{SchemaValidator, Validate};

use super::document::{ProjectEntry, Tool, ToolConfig, WorkspaceDocument};
use super::options::{ReloadPolicy, ResolverOptions};
use crate::{Error, Result};

/// Loads a workspace document and answers queries about it.
///
/// The resolver has no internal synchronization. Loads take `&mut self`,
/// so two loads can never interleave on one instance.
pub struct WorkspaceResolver<H> {
    root: NormalizedPath,
    host: H,
    options: ResolverOptions,
    /// Compiled on first load unless supplied up front
    validator: Option<Arc<dyn Validate>>,
    workspace: Option<WorkspaceDocument>,
}

impl<H> WorkspaceResolver<H> {
    /// Create an unloaded resolver for the workspace at `root`.
    pub fn new(root: impl Into<NormalizedPath>, host: H) -> Self {
        Self::with_options(root, host, ResolverOptions::default())
    }

    /// Create an unloaded resolver with explicit options.
    pub fn with_options(root: impl Into<NormalizedPath>, host: H, options: ResolverOptions) -> Self {
        Self {
            root: root.into().normalize(),
            host,
            options,
            validator: None,
            workspace: None,
        }
    }

    /// Use `validator` instead of the bundled workspace schema.
    pub fn with_validator(mut self, validator: Arc<dyn Validate>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn is_loaded(&self) -> bool {
        self.workspace.is_some()
    }

    /// Load an already-parsed document.
    ///
    /// On success the snapshot is replaced and the same resolver is
    /// returned so a query can be chained. On failure no snapshot is kept.
    pub async fn load_from_value(&mut self, raw: Value) -> Result<&mut Self> {
        self.begin_load()?;

        let document = self.validate(raw)?;
        tracing::debug!(
            version = document.version,
            projects = document.projects.len(),
            "Workspace loaded"
        );
        self.workspace = Some(document);
        Ok(self)
    }

    /// Borrow the cached snapshot.
    pub fn document(&self) -> Result<&WorkspaceDocument> {
        self.workspace.as_ref().ok_or(Error::NotYetLoaded)
    }

    pub fn version(&self) -> Result<u64> {
        Ok(self.document()?.version)
    }

    pub fn new_project_root(&self) -> Result<Option<&str>> {
        Ok(self.document()?.new_project_root.as_deref())
    }

    /// Project names in document order.
    pub fn list_project_names(&self) -> Result<Vec<&str>> {
        Ok(self
            .document()?
            .projects
            .keys()
            .map(String::as_str)
            .collect())
    }

    /// The view of a named project, with its tool overrides emptied.
    ///
    /// Use [`get_project_tool`](Self::get_project_tool) and friends for
    /// the overrides themselves.
    pub fn get_project(&self, name: &str) -> Result<ProjectEntry> {
        self.project_entry(name).map(ProjectEntry::without_tools)
    }

    /// Name of the default project, if one can be inferred.
    pub fn default_project_name(&self) -> Result<Option<&str>> {
        Ok(self.document()?.default_project_name())
    }

    /// View of the default project, or `None` when there is no
    /// unambiguous default.
    pub fn get_default_project(&self) -> Result<Option<ProjectEntry>> {
        match self.default_project_name()? {
            Some(name) => self.get_project(name).map(Some),
            None => Ok(None),
        }
    }

    /// Workspace-wide settings for `tool`.
    pub fn get_tool(&self, tool: Tool) -> Result<&ToolConfig> {
        Ok(self.document()?.tool(tool))
    }

    pub fn get_cli(&self) -> Result<&ToolConfig> {
        self.get_tool(Tool::Cli)
    }

    pub fn get_schematics(&self) -> Result<&ToolConfig> {
        self.get_tool(Tool::Schematics)
    }

    pub fn get_architect(&self) -> Result<&ToolConfig> {
        self.get_tool(Tool::Architect)
    }

    /// Per-project overrides for `tool`.
    pub fn get_project_tool(&self, name: &str, tool: Tool) -> Result<&ToolConfig> {
        Ok(self.project_entry(name)?.tool(tool))
    }

    pub fn get_project_cli(&self, name: &str) -> Result<&ToolConfig> {
        self.get_project_tool(name, Tool::Cli)
    }

    pub fn get_project_schematics(&self, name: &str) -> Result<&ToolConfig> {
        self.get_project_tool(name, Tool::Schematics)
    }

    pub fn get_project_architect(&self, name: &str) -> Result<&ToolConfig> {
        self.get_project_tool(name, Tool::Architect)
    }

    /// Name of the project that owns `path`.
    ///
    /// Relative paths are taken from the workspace root. The project with
    /// the deepest root containing the path wins, so nested projects take
    /// precedence over their parents and a project rooted at the workspace
    /// root only catches what nothing else claims. Paths outside the
    /// workspace belong to no project.
    pub fn get_project_by_path(&self, path: impl Into<NormalizedPath>) -> Result<Option<&str>> {
        let document = self.document()?;
        let path: NormalizedPath = path.into();
        let path = self.root.join(path.as_str()).normalize();

        if !path.is_within(&self.root) {
            tracing::trace!(%path, root = %self.root, "Path is outside the workspace");
            return Ok(None);
        }

        let mut best: Option<(&str, usize)> = None;
        for (name, entry) in &document.projects {
            let project_root = self.root.join(&entry.root).normalize();
            if !path.is_within(&project_root) {
                continue;
            }
            let depth = project_root.as_str().len();
            if best.is_none_or(|(_, best_depth)| depth > best_depth) {
                best = Some((name.as_str(), depth));
            }
        }

        tracing::trace!(%path, project = ?best.map(|(name, _)| name), "Resolved project by path");
        Ok(best.map(|(name, _)| name))
    }

    fn project_entry(&self, name: &str) -> Result<&ProjectEntry> {
        self.document()?
            .projects
            .get(name)
            .ok_or_else(|| Error::project_not_found(name))
    }

    /// Apply the reload policy and drop any previous snapshot.
    fn begin_load(&mut self) -> Result<()> {
        if self.workspace.is_some() {
            if self.options.reload == ReloadPolicy::Reject {
                return Err(Error::AlreadyLoaded);
            }
            tracing::debug!("Replacing loaded workspace");
        }
        self.workspace = None;
        Ok(())
    }

    fn validate(&mut self, raw: Value) -> Result<WorkspaceDocument> {
        let validator = self.validator()?;
        validator.validate(&raw)?;
        Ok(serde_json::from_value(raw)?)
    }

    fn validator(&mut self) -> Result<Arc<dyn Validate>> {
        if let Some(validator) = &self.validator {
            return Ok(Arc::clone(validator));
        }
        let validator: Arc<dyn Validate> = Arc::new(SchemaValidator::workspace()?);
        self.validator = Some(Arc::clone(&validator));
        Ok(validator)
    }
}

impl<H: Host> WorkspaceResolver<H> {
    /// Read `relative_path` from the host, parse it and load it.
    ///
    /// The path is resolved against the resolver root. Read, parse and
    /// validation failures all leave the resolver unloaded.
    pub async fn load_from_host(&mut self, relative_path: &str) -> Result<&mut Self> {
        self.begin_load()?;

        let path = self.root.join(relative_path).normalize();
        tracing::debug!(%path, "Loading workspace from host");

        let bytes = self.host.read(&path).await?;
        let raw: Value = serde_json::from_slice(&bytes).map_err(|e| Error::Parse {
            path: path.to_native(),
            message: e.to_string(),
        })?;

        self.load_from_value(raw).await
    }

    /// Load the document named by [`ResolverOptions::workspace_file`].
    pub async fn load_default(&mut self) -> Result<&mut Self> {
        let file = self.options.workspace_file.clone();
        self.load_from_host(&file).await
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for WorkspaceResolver<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceResolver")
            .field("root", &self.root)
            .field("host", &self.host)
            .field("options", &self.options)
            .field("loaded", &self.workspace.is_some())
            .finish()
    }
}
