//! Project listing and lookup commands

use std::path::Path;

use colored::Colorize;
use ws_core::WorkspaceResolver;
use ws_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the version command
pub fn run_version<H>(resolver: &WorkspaceResolver<H>) -> Result<()> {
    println!("{}", resolver.version()?);
    Ok(())
}

/// Run the projects command
pub fn run_projects<H>(resolver: &WorkspaceResolver<H>, json: bool) -> Result<()> {
    let names = resolver.list_project_names()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("{}", "No projects".dimmed());
        return Ok(());
    }

    let default = resolver.default_project_name()?;
    for name in names {
        if Some(name) == default {
            println!("  {} {} {}", "+".green(), name.cyan(), "(default)".dimmed());
        } else {
            println!("  {} {}", "+".green(), name.cyan());
        }
    }
    Ok(())
}

/// Run the project command
pub fn run_project<H>(resolver: &WorkspaceResolver<H>, name: &str, json: bool) -> Result<()> {
    let project = resolver.get_project(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    println!("{}", name.bold());
    println!("{}:   {}", "Root".dimmed(), display_root(&project.root));
    println!("{}:   {}", "Type".dimmed(), project.project_type.to_string().cyan());
    if let Some(prefix) = &project.prefix {
        println!("{}: {}", "Prefix".dimmed(), prefix);
    }
    Ok(())
}

/// Run the default command
pub fn run_default<H>(resolver: &WorkspaceResolver<H>) -> Result<()> {
    match resolver.default_project_name()? {
        Some(name) => println!("{name}"),
        None => println!("{}", "(none)".dimmed()),
    }
    Ok(())
}

/// Run the which command
pub fn run_which<H>(resolver: &WorkspaceResolver<H>, path: &Path) -> Result<()> {
    let path = NormalizedPath::new(path);
    match resolver.get_project_by_path(path.clone())? {
        Some(name) => {
            println!("{name}");
            Ok(())
        }
        None => Err(CliError::user(format!("No project contains {path}"))),
    }
}

fn display_root(root: &str) -> &str {
    if root.is_empty() { "." } else { root }
}
