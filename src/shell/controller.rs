//! Shell controller hosting the navigator in an event loop.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use super::clock::Clock;
use super::keys::{self, Command};
use super::render::{self, View};
use crate::ShellConfig;
use crate::navigation::{Action, Navigator, Screen};
use crate::registry::{Control, ScreenRegistry};

/// Whether the event loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the shell.
    Quit,
}

/// Owns the navigator and the registry, and turns key presses into navigator calls.
///
/// Call [`ShellController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct ShellController {
    navigator: Navigator,
    registry: ScreenRegistry,
    config: ShellConfig,
    selected: usize,
}

impl ShellController {
    /// Creates a controller positioned on the configured start screen.
    #[instrument(skip(registry))]
    pub fn new(config: ShellConfig, registry: ScreenRegistry) -> Self {
        info!(start_screen = %config.start_screen(), "Creating ShellController");
        let navigator = Navigator::starting_at(*config.start_screen(), *config.menu_policy());
        Self {
            navigator,
            registry,
            config,
            selected: 0,
        }
    }

    /// Controls offered on the current screen.
    #[instrument(skip(self))]
    pub fn controls(&self) -> Vec<Control> {
        self.registry
            .controls(&self.navigator.current_state(), self.navigator.table())
    }

    /// The control currently highlighted, if the screen offers any.
    pub fn selected_control(&self) -> Option<Control> {
        self.controls().get(self.selected).copied()
    }

    /// Runs the event loop until the user quits.
    ///
    /// The wall clock runs for exactly as long as this call.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting shell event loop");
        let clock = Clock::spawn(self.config.clock_refresh());
        let result = self.event_loop(terminal, &clock).await;
        clock.shutdown().await;
        info!("Shell event loop finished");
        result
    }

    async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        clock: &Clock,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        loop {
            {
                let state = self.navigator.current_state();
                let controls = self.controls();
                let view = View {
                    state,
                    entry: self.registry.lookup(state.current_screen),
                    controls: &controls,
                    selected: self.selected,
                    clock: clock.now(),
                };
                terminal.draw(|f| render::draw(f, &view))?;
            }

            if event::poll(self.config.tick_rate())?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if let Some(command) = keys::command_for(key.code)
                    && self.handle_command(command) == Flow::Quit
                {
                    info!("Shell quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies one command to the navigator.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) -> Flow {
        let controls = self.controls();
        match command {
            Command::SelectPrevious => {
                self.selected = match self.selected {
                    0 => controls.len().saturating_sub(1),
                    i => i - 1,
                };
            }
            Command::SelectNext => {
                self.selected = if controls.is_empty() {
                    0
                } else {
                    (self.selected + 1) % controls.len()
                };
            }
            Command::Activate => {
                if let Some(control) = controls.get(self.selected).copied() {
                    self.activate(control);
                }
            }
            Command::ToggleMenu => {
                if let Some(overlay) = self.navigator.current_state().current_screen.overlay() {
                    self.activate(Control::ToggleMenu(overlay));
                }
            }
            Command::Back => {
                let back = Control::Navigate(Action::Back);
                if controls.contains(&back) {
                    self.activate(back);
                } else {
                    debug!("Screen has no back control");
                }
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Performs `control`, resetting the selection when the screen changes.
    ///
    /// On the same screen the highlight follows the previously selected
    /// control, since opening or closing a menu reorders the list.
    #[instrument(skip(self))]
    pub fn activate(&mut self, control: Control) {
        let before: Screen = self.navigator.current_state().current_screen;
        let highlighted = self.selected_control();
        match control {
            Control::Navigate(action) => {
                self.navigator.dispatch(action);
            }
            Control::ToggleMenu(overlay) => self.navigator.toggle_overlay(overlay),
        }

        if self.navigator.current_state().current_screen != before {
            self.selected = 0;
        } else {
            let controls = self.controls();
            self.selected = highlighted
                .and_then(|c| controls.iter().position(|other| *other == c))
                .unwrap_or_else(|| self.selected.min(controls.len().saturating_sub(1)));
        }
    }
}
