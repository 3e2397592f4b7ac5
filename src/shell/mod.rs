//! Terminal shell hosting the navigator: event loop, rendering, and the wall clock.

mod clock;
mod controller;
mod keys;
mod render;

pub use clock::{Clock, local_time};
pub use controller::{Flow, ShellController};
pub use keys::{Command, command_for};
pub use render::{View, draw};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::ShellConfig;
use crate::registry::ScreenRegistry;

/// Leaves raw mode and the alternate screen when dropped, unless already restored.
#[derive(Debug, Default)]
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Enters raw mode; the returned guard undoes it on every exit path.
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self::default())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Sets up the terminal, runs the shell until the user quits, and restores the terminal.
#[instrument(skip(config))]
pub async fn run_shell(config: ShellConfig) -> Result<()> {
    let registry = ScreenRegistry::standard()?;
    let mut controller = ShellController::new(config, registry);

    info!("Entering alternate screen");
    let mut guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Shell loop error");
    }
    res
}
