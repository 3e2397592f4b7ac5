//! Key bindings for the shell.

use crossterm::event::KeyCode;

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the control selection up.
    SelectPrevious,
    /// Move the control selection down.
    SelectNext,
    /// Activate the selected control.
    Activate,
    /// Open or close the current screen's menu.
    ToggleMenu,
    /// Activate the screen's back control.
    Back,
    /// Leave the shell.
    Quit,
}

/// Maps a key to a command; unbound keys map to `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMenu),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Command::Back),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}
