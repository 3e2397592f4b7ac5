//! Command-line interface for resto_pager.

use clap::{Parser, Subcommand};

/// Resto Pager - walkthrough of a restaurant staff-paging app
#[derive(Parser, Debug)]
#[command(name = "resto_pager")]
#[command(about = "Terminal walkthrough of a restaurant staff-paging app", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive terminal shell
    Run {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Screen to start on (kebab-case identifier, e.g. `servers-empty`)
        #[arg(long)]
        start_screen: Option<String>,

        /// Close open menus whenever the screen changes
        #[arg(long)]
        close_menus_on_navigate: bool,

        /// File to write logs to (the terminal is busy with the UI)
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// List every screen with its title and overlay menu
    Screens,

    /// Print every edge of the navigation graph
    Graph,
}
