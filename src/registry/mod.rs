//! Static mapping from screen identifier to renderable content.

mod content;
mod entry;

pub use entry::{Control, OverlayEntry, ScreenEntry};

use tracing::{debug, info, instrument};

use crate::RegistryError;
use crate::navigation::{NavigationState, Screen, TransitionTable};

/// Complete, validated set of screen entries.
///
/// Construction checks that every screen has exactly one entry, so lookups
/// never fail.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    entries: Vec<ScreenEntry>,
}

impl ScreenRegistry {
    /// Builds a registry from entries supplied by the rendering layer.
    ///
    /// Fails if a screen is missing, listed twice, or carries an overlay the
    /// screen does not own.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn new(entries: Vec<ScreenEntry>) -> Result<Self, RegistryError> {
        let mut slots: Vec<Option<ScreenEntry>> = vec![None; Screen::COUNT];

        for entry in entries {
            let expected = entry.screen.overlay();
            let supplied = entry.overlay.as_ref().map(|o| o.overlay);
            if expected != supplied {
                return Err(RegistryError::new(format!(
                    "Screen '{}' owns overlay {:?} but entry supplies {:?}",
                    entry.screen, expected, supplied
                )));
            }

            let slot = &mut slots[entry.screen as usize];
            if slot.is_some() {
                return Err(RegistryError::new(format!(
                    "Duplicate entry for screen '{}'",
                    entry.screen
                )));
            }
            *slot = Some(entry);
        }

        let mut ordered = Vec::with_capacity(Screen::COUNT);
        for (screen, slot) in Screen::all().zip(slots) {
            match slot {
                Some(entry) => ordered.push(entry),
                None => {
                    return Err(RegistryError::new(format!(
                        "Missing entry for screen '{}'",
                        screen
                    )));
                }
            }
        }

        info!("Screen registry validated");
        Ok(Self { entries: ordered })
    }

    /// Builds the registry holding the built-in sample content.
    #[instrument]
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(content::standard_entries())
    }

    /// Entry for `screen`.
    pub fn lookup(&self, screen: Screen) -> &ScreenEntry {
        &self.entries[screen as usize]
    }

    /// All entries in screen order.
    pub fn entries(&self) -> &[ScreenEntry] {
        &self.entries
    }

    /// Controls the current screen offers, top to bottom.
    ///
    /// Menu items come first and only while the screen's overlay is visible,
    /// then the menu toggle, then the on-screen actions.
    #[instrument(skip(self, table))]
    pub fn controls(&self, state: &NavigationState, table: &TransitionTable) -> Vec<Control> {
        let screen = state.current_screen;
        let actions = table.actions_for(screen);
        let menu_visible = state.visible_overlay().is_some();

        let mut controls: Vec<Control> = Vec::with_capacity(actions.len() + 1);
        if menu_visible {
            controls.extend(
                actions
                    .iter()
                    .filter(|a| a.is_menu_item())
                    .map(|a| Control::Navigate(*a)),
            );
        }
        if let Some(overlay) = screen.overlay() {
            controls.push(Control::ToggleMenu(overlay));
        }
        controls.extend(
            actions
                .iter()
                .filter(|a| !a.is_menu_item())
                .map(|a| Control::Navigate(*a)),
        );

        debug!(count = controls.len(), menu_visible, "Computed controls");
        controls
    }
}
