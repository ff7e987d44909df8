//! Workspace inspector CLI
//!
//! Loads a workspace document and prints what the resolver knows about it.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use ws_core::WorkspaceResolver;
use ws_fs::LocalHost;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let resolver = runtime.block_on(async {
        let root = context::resolve_root(&LocalHost::new(), cli.root, &cli.file).await?;
        context::load_workspace(&root, &cli.file).await
    })?;

    execute_command(&resolver, cli.command)
}

fn execute_command(resolver: &WorkspaceResolver<LocalHost>, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Version => commands::run_version(resolver),
        Commands::Projects { json } => commands::run_projects(resolver, json),
        Commands::Project { name, json } => commands::run_project(resolver, &name, json),
        Commands::Default => commands::run_default(resolver),
        Commands::Tool { tool, project } => commands::run_tool(resolver, tool, project.as_deref()),
        Commands::Which { path } => {
            let cwd = std::env::current_dir()?;
            commands::run_which(resolver, &cwd.join(path))
        }
    }
}
