//! Resto Pager - Unified CLI
//!
//! Interactive shell plus inspection commands for the screen graph.

#![warn(missing_docs)]

mod cli;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use resto_pager::{MenuPolicy, ScreenRegistry, ShellConfig, TransitionTable, run_shell};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            start_screen,
            close_menus_on_navigate,
            log_file,
        } => {
            run(
                config,
                start_screen,
                close_menus_on_navigate,
                log_file,
            )
            .await
        }
        Command::Screens => {
            initialize_stderr_tracing();
            list_screens()
        }
        Command::Graph => {
            initialize_stderr_tracing();
            print_graph();
            Ok(())
        }
    }
}

/// Run the interactive shell
async fn run(
    config_path: Option<PathBuf>,
    start_screen: Option<String>,
    close_menus_on_navigate: bool,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = ShellConfig::load(config_path.as_deref())?;
    if let Some(name) = start_screen {
        config = config.with_start_screen_named(&name)?;
    }
    if close_menus_on_navigate {
        config = config.with_menu_policy(MenuPolicy::CloseOnNavigate);
    }
    if let Some(path) = log_file {
        config = config.with_log_file(path);
    }

    initialize_file_tracing(config.log_file())?;
    info!(?config, "Starting Resto Pager shell");

    run_shell(config).await
}

/// Print the screen registry
#[instrument]
fn list_screens() -> Result<()> {
    let registry = ScreenRegistry::standard()?;
    for entry in registry.entries() {
        let overlay = entry
            .overlay
            .as_ref()
            .map(|o| o.overlay.to_string())
            .unwrap_or_else(|| "-".to_string());
        let title = if entry.title.is_empty() { "(untitled)" } else { entry.title };
        println!("{:<22} {:<26} {}", entry.screen, title, overlay);
    }
    Ok(())
}

/// Print the transition graph
#[instrument]
fn print_graph() {
    let table = TransitionTable::new();
    for edge in table.edges() {
        println!("{:<22} --{:<28}--> {}", edge.from, edge.action, edge.to);
    }
}

/// Logs go to a file so they don't interfere with the TUI.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
