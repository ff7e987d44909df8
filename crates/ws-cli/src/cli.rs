//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ws_core::Tool;

/// Inspect a multi-project workspace document
#[derive(Parser, Debug)]
#[command(name = "ws")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the nearest directory holding the workspace file)
    #[arg(long, global = true, env = "WS_ROOT")]
    pub root: Option<PathBuf>,

    /// Workspace document, relative to the root
    #[arg(short, long, global = true, default_value = "workspace.json")]
    pub file: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the workspace schema version
    Version,

    /// List project names in document order
    Projects {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show a project's root, type and prefix
    Project {
        /// Project name
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the default project, if one can be inferred
    Default,

    /// Print tool settings as JSON
    ///
    /// Examples:
    ///   ws tool cli                  # Workspace-wide cli settings
    ///   ws tool architect -p app     # Build targets of project "app"
    Tool {
        /// Tool scope: cli, schematics or architect
        tool: Tool,

        /// Show the overrides of this project instead of the global settings
        #[arg(short, long)]
        project: Option<String>,
    },

    /// Print the project that owns a path
    Which {
        /// File or directory, relative to the current directory
        path: PathBuf,
    },
}
