//! Navigator: the single owner of the current screen and overlay flags.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::action::Action;
use super::screen::{Overlay, Screen};
use super::transitions::TransitionTable;
use crate::InvalidScreenError;

/// Snapshot of what the renderer should show.
///
/// The two menu flags are independent: both may be set at once, though a screen
/// only ever draws the overlay it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// The visible screen.
    pub current_screen: Screen,
    /// Account menu flag.
    pub account_menu_open: bool,
    /// Servers menu flag.
    pub server_menu_open: bool,
}

impl NavigationState {
    /// Initial state of a session: welcome screen, both menus closed.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Whether the flag behind `overlay` is set, regardless of the current screen.
    pub fn is_open(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Account => self.account_menu_open,
            Overlay::Servers => self.server_menu_open,
        }
    }

    /// The overlay to draw: the current screen's own overlay, if its flag is set.
    #[instrument]
    pub fn visible_overlay(&self) -> Option<Overlay> {
        self.current_screen
            .overlay()
            .filter(|overlay| self.is_open(*overlay))
    }
}

/// What happens to open menus when the screen changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuPolicy {
    /// Menus keep their flags across navigation.
    #[default]
    Persist,
    /// Both menus close whenever the current screen changes.
    CloseOnNavigate,
}

/// Holds the [`NavigationState`] and is the only way to change it.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
    table: TransitionTable,
    policy: MenuPolicy,
}

impl Navigator {
    /// Creates a navigator at the welcome screen with menus persisting across navigation.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(MenuPolicy::default())
    }

    /// Creates a navigator at the welcome screen with the given menu policy.
    #[instrument]
    pub fn with_policy(policy: MenuPolicy) -> Self {
        debug!(?policy, "Creating Navigator");
        Self {
            state: NavigationState::initial(),
            table: TransitionTable::new(),
            policy,
        }
    }

    /// Creates a navigator starting on `screen` instead of welcome.
    #[instrument]
    pub fn starting_at(screen: Screen, policy: MenuPolicy) -> Self {
        let mut navigator = Self::with_policy(policy);
        navigator.state.current_screen = screen;
        navigator
    }

    /// Read-only snapshot for the renderer.
    pub fn current_state(&self) -> NavigationState {
        self.state
    }

    /// The transition graph this navigator follows.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// The menu policy in force.
    pub fn policy(&self) -> MenuPolicy {
        self.policy
    }

    /// Shows `screen`.
    ///
    /// Menu flags are left alone under [`MenuPolicy::Persist`]; under
    /// [`MenuPolicy::CloseOnNavigate`] they are cleared if the screen changes.
    #[instrument(skip(self), fields(from = %self.state.current_screen))]
    pub fn go_to(&mut self, screen: Screen) {
        let from = self.state.current_screen;
        if self.policy == MenuPolicy::CloseOnNavigate && from != screen {
            debug!("Closing menus on navigation");
            self.state.account_menu_open = false;
            self.state.server_menu_open = false;
        }
        self.state.current_screen = screen;
        info!(%from, to = %screen, "Navigated");
    }

    /// Shows the screen named by a kebab-case identifier.
    ///
    /// Unknown names are a wiring bug: they are logged at error level, returned
    /// as [`InvalidScreenError`], and the state is left untouched.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn go_to_named(&mut self, name: &str) -> Result<(), InvalidScreenError> {
        let screen = Screen::parse(name).inspect_err(|e| {
            error!(error = %e, "Refusing navigation to unknown screen");
        })?;
        self.go_to(screen);
        Ok(())
    }

    /// Activates `action` on the current screen and returns the new screen.
    ///
    /// Returns `None` without changing anything if the current screen does not
    /// offer the action.
    #[instrument(skip(self), fields(screen = %self.state.current_screen))]
    pub fn dispatch(&mut self, action: Action) -> Option<Screen> {
        match self.table.destination(self.state.current_screen, action) {
            Some(next) => {
                self.go_to(next);
                Some(next)
            }
            None => {
                warn!(%action, "Action not offered on this screen");
                None
            }
        }
    }

    /// Flips the account menu flag.
    #[instrument(skip(self))]
    pub fn toggle_account_menu(&mut self) {
        self.state.account_menu_open = !self.state.account_menu_open;
        debug!(open = self.state.account_menu_open, "Toggled account menu");
    }

    /// Flips the servers menu flag.
    #[instrument(skip(self))]
    pub fn toggle_server_menu(&mut self) {
        self.state.server_menu_open = !self.state.server_menu_open;
        debug!(open = self.state.server_menu_open, "Toggled servers menu");
    }

    /// Flips the flag behind `overlay`.
    #[instrument(skip(self))]
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Account => self.toggle_account_menu(),
            Overlay::Servers => self.toggle_server_menu(),
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_welcome_with_menus_closed() {
        let nav = Navigator::new();
        assert_eq!(nav.current_state(), NavigationState::initial());
        assert_eq!(nav.current_state().current_screen, Screen::Welcome);
    }

    #[test]
    fn test_visible_overlay_requires_owning_screen() {
        let mut nav = Navigator::starting_at(Screen::Payment, MenuPolicy::Persist);
        nav.toggle_server_menu();
        assert_eq!(nav.current_state().visible_overlay(), None);
        nav.go_to(Screen::ServersList);
        assert_eq!(nav.current_state().visible_overlay(), Some(Overlay::Servers));
    }

    #[test]
    fn test_close_on_navigate_keeps_menus_on_same_screen() {
        let mut nav = Navigator::starting_at(Screen::Account, MenuPolicy::CloseOnNavigate);
        nav.toggle_account_menu();
        nav.go_to(Screen::Account);
        assert!(nav.current_state().account_menu_open);
    }

    #[test]
    fn test_dispatch_unavailable_action_is_noop() {
        let mut nav = Navigator::new();
        assert_eq!(nav.dispatch(Action::Logout), None);
        assert_eq!(nav.current_state(), NavigationState::initial());
    }
}
