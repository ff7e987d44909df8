//! Tool settings command

use ws_core::{Tool, WorkspaceResolver};

use crate::error::Result;

/// Run the tool command
pub fn run_tool<H>(
    resolver: &WorkspaceResolver<H>,
    tool: Tool,
    project: Option<&str>,
) -> Result<()> {
    let config = match project {
        Some(name) => resolver.get_project_tool(name, tool)?,
        None => resolver.get_tool(tool)?,
    };
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
