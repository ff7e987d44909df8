//! Typed form of a validated workspace document
//!
//! The document is deserialized only after schema validation passed, so
//! the types here describe shape rather than enforce it.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Opaque, arbitrarily nested tool settings.
///
/// Keys keep document order and are never interpreted, including
/// `$`-prefixed marker keys.
pub type ToolConfig = Map<String, Value>;

/// The three tool scopes a workspace or project can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Cli,
    Schematics,
    Architect,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Cli, Tool::Schematics, Tool::Architect];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Cli => "cli",
            Tool::Schematics => "schematics",
            Tool::Architect => "architect",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cli" => Ok(Tool::Cli),
            "schematics" => Ok(Tool::Schematics),
            "architect" => Ok(Tool::Architect),
            _ => Err(format!(
                "unknown tool '{s}', expected one of: cli, schematics, architect"
            )),
        }
    }
}

/// Kind of project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Library,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Application => write!(f, "application"),
            ProjectType::Library => write!(f, "library"),
        }
    }
}

/// A project as declared in the workspace document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Project root, relative to the workspace root
    pub root: String,

    pub project_type: ProjectType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default)]
    pub cli: ToolConfig,

    #[serde(default)]
    pub schematics: ToolConfig,

    #[serde(default)]
    pub architect: ToolConfig,
}

impl ProjectEntry {
    /// Tool overrides for one scope.
    pub fn tool(&self, tool: Tool) -> &ToolConfig {
        match tool {
            Tool::Cli => &self.cli,
            Tool::Schematics => &self.schematics,
            Tool::Architect => &self.architect,
        }
    }

    /// Copy of this entry with every tool override emptied.
    ///
    /// This is the project view handed out by name lookups; tool settings
    /// are only reachable through the dedicated tool accessors.
    pub fn without_tools(&self) -> Self {
        Self {
            root: self.root.clone(),
            project_type: self.project_type,
            prefix: self.prefix.clone(),
            cli: ToolConfig::new(),
            schematics: ToolConfig::new(),
            architect: ToolConfig::new(),
        }
    }
}

/// The validated workspace snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDocument {
    /// Schema reference carried by the document, if any
    #[serde(default, rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(deserialize_with = "deserialize_version")]
    pub version: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_project_root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,

    #[serde(default)]
    pub cli: ToolConfig,

    #[serde(default)]
    pub schematics: ToolConfig,

    #[serde(default)]
    pub architect: ToolConfig,

    /// Projects keyed by name, in document order
    #[serde(default)]
    pub projects: IndexMap<String, ProjectEntry>,
}

/// Draft-07 treats `1.0` as an integer, so whole floats are accepted too.
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(version) = number.as_u64() {
        return Ok(version);
    }
    number
        .as_f64()
        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
        .ok_or_else(|| D::Error::custom(format!("version must be a non-negative integer, got {number}")))
}

impl WorkspaceDocument {
    /// Workspace-wide settings for one scope.
    pub fn tool(&self, tool: Tool) -> &ToolConfig {
        match tool {
            Tool::Cli => &self.cli,
            Tool::Schematics => &self.schematics,
            Tool::Architect => &self.architect,
        }
    }

    /// Name of the default project.
    ///
    /// An explicit `defaultProject` wins when it names an existing project.
    /// Otherwise a workspace with exactly one project defaults to it, and
    /// anything else has no default.
    pub fn default_project_name(&self) -> Option<&str> {
        if let Some(name) = self.default_project.as_deref() {
            if let Some((key, _)) = self.projects.get_key_value(name) {
                return Some(key.as_str());
            }
            tracing::debug!(name, "defaultProject names a missing project");
        }

        if self.projects.len() == 1 {
            return self.projects.keys().next().map(String::as_str);
        }

        None
    }
}
