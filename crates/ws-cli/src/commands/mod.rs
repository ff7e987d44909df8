//! Command implementations for ws-cli

pub mod project;
pub mod tool;

pub use project::{run_default, run_project, run_projects, run_version, run_which};
pub use tool::run_tool;
