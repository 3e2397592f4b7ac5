//! Screen identifiers and the per-screen facts the navigator relies on.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, IntoEnumIterator};
use tracing::instrument;

use crate::InvalidScreenError;

/// Every screen of the paging app, in onboarding-to-settings order.
///
/// Identifiers render and parse in kebab-case (`servers-empty`, `add-table`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Registration form, the session entry point.
    #[default]
    Welcome,
    /// E-mail login form.
    Login,
    /// Code entry for the e-mailed login code.
    Verification,
    /// Subscription payment form.
    Payment,
    /// Per-server account dashboard.
    Account,
    /// Establishment dashboard with no server registered yet.
    ServersEmpty,
    /// Establishment dashboard listing servers.
    ServersList,
    /// Server registration form.
    AddServer,
    /// Today's alert activity for one server.
    Activity,
    /// Table list.
    Tables,
    /// Table list with the add-table form open.
    AddTable,
    /// Past subscription payments.
    SubscriptionHistory,
    /// Owner profile and logout.
    ProfileSettings,
}

/// The two transient menus a screen can draw over itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Overlay {
    /// Account menu on the account dashboard.
    Account,
    /// Management menu on both establishment dashboards.
    Servers,
}

impl Screen {
    /// Number of screens in the closed set.
    pub const COUNT: usize = 13;

    /// Resolves a kebab-case identifier, failing loudly on anything outside the set.
    #[track_caller]
    #[instrument]
    pub fn parse(name: &str) -> Result<Self, InvalidScreenError> {
        match name.parse::<Self>() {
            Ok(screen) => Ok(screen),
            Err(_) => Err(InvalidScreenError::new(name)),
        }
    }

    /// Returns the kebab-case identifier.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// All screens in declaration order.
    pub fn all() -> impl Iterator<Item = Screen> {
        Self::iter()
    }

    /// The overlay menu this screen can show, if any.
    #[instrument]
    pub fn overlay(self) -> Option<Overlay> {
        match self {
            Self::Account => Some(Overlay::Account),
            Self::ServersEmpty | Self::ServersList => Some(Overlay::Servers),
            _ => None,
        }
    }

    /// Whether the screen draws the shared header whose back arrow returns to welcome.
    #[instrument]
    pub fn uses_header_back(self) -> bool {
        !matches!(
            self,
            Self::Welcome | Self::Tables | Self::AddTable | Self::SubscriptionHistory
        )
    }

    /// Where this screen's back control leads, or `None` if it has none.
    ///
    /// Screens with the shared header always return to [`Screen::Welcome`];
    /// the table and history screens draw their own header with a local target.
    #[instrument]
    pub fn back_target(self) -> Option<Screen> {
        match self {
            Self::Welcome => None,
            Self::Tables | Self::SubscriptionHistory => Some(Self::ServersEmpty),
            Self::AddTable => Some(Self::Tables),
            _ => Some(Self::Welcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_count_matches_iter() {
        assert_eq!(Screen::all().count(), Screen::COUNT);
    }

    #[test]
    fn test_identifiers_are_kebab_case() {
        assert_eq!(Screen::ServersEmpty.id(), "servers-empty");
        assert_eq!(Screen::SubscriptionHistory.id(), "subscription-history");
        assert_eq!(Screen::ProfileSettings.to_string(), "profile-settings");
    }

    #[test]
    fn test_parse_round_trips_every_identifier() {
        for screen in Screen::all() {
            assert_eq!(Screen::parse(screen.id()).unwrap(), screen);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Screen::parse("kitchen").unwrap_err();
        assert_eq!(err.name, "kitchen");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(Screen::parse("Welcome").is_err());
        assert!(Screen::parse("servers_empty").is_err());
    }

    #[test]
    fn test_default_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn test_overlay_owners() {
        let owners: Vec<Screen> = Screen::all().filter(|s| s.overlay().is_some()).collect();
        assert_eq!(
            owners,
            [Screen::Account, Screen::ServersEmpty, Screen::ServersList]
        );
    }

    #[test]
    fn test_header_back_screens_target_welcome() {
        for screen in Screen::all().filter(|s| s.uses_header_back()) {
            assert_eq!(screen.back_target(), Some(Screen::Welcome), "{screen}");
        }
    }
}
