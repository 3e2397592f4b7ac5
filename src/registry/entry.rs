//! Registry entry types and the controls a screen offers.

use tracing::instrument;

use crate::navigation::{Action, Overlay, Screen};

/// Static content of one overlay menu.
///
/// Only the inert lines live here; the navigable items are the screen's
/// menu actions from the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayEntry {
    /// Which menu this is.
    pub overlay: Overlay,
    /// Informational lines and items that do not navigate.
    pub lines: &'static [&'static str],
}

/// Static content of one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenEntry {
    /// The screen this entry renders.
    pub screen: Screen,
    /// Header title (may be empty).
    pub title: &'static str,
    /// Sample body content, one line per item.
    pub body: &'static [&'static str],
    /// Overlay menu drawn on top of the screen when its flag is set.
    pub overlay: Option<OverlayEntry>,
}

/// One activation the shell can offer the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Dispatch a navigation action.
    Navigate(Action),
    /// Open or close an overlay menu.
    ToggleMenu(Overlay),
}

impl Control {
    /// Returns the text shown for this control.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigate(action) => action.label(),
            Self::ToggleMenu(_) => "☰ Menu",
        }
    }
}
