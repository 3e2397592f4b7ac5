//! User activations that move between screens.

use strum::{Display, EnumIter, IntoStaticStr};
use tracing::instrument;

/// A button or menu item the user can activate.
///
/// The same action may be offered by several screens (`Back`, the servers menu
/// items); the destination is resolved by the
/// [`TransitionTable`](crate::TransitionTable) from the pair of screen and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    /// Submit the registration form.
    SubmitRegistration,
    /// Switch the auth card to the login tab.
    ShowLogin,
    /// Switch the auth card to the registration tab.
    ShowRegistration,
    /// Ask for an e-mailed login code.
    RequestCode,
    /// Submit the e-mailed code.
    SubmitCode,
    /// Confirm the subscription payment.
    ConfirmPayment,
    /// Select the "servers" tab of the dashboard.
    ShowServers,
    /// Select the "menu" tab of the dashboard.
    ShowMenu,
    /// Servers menu: add a table.
    MenuAddTable,
    /// Servers menu: add a server.
    MenuAddServer,
    /// Servers menu: subscription history.
    MenuSubscriptionHistory,
    /// Save the new server.
    SubmitServer,
    /// Open the add-table form.
    AddTable,
    /// Save the new table.
    SubmitTable,
    /// Account menu: account settings.
    MenuAccountSettings,
    /// Select the "today" activity filter.
    ShowToday,
    /// Log out of the profile.
    Logout,
    /// The screen's back arrow.
    Back,
}

impl Action {
    /// Returns the label shown on the control.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::SubmitRegistration => "VALIDÉ",
            Self::ShowLogin => "Se connecter",
            Self::ShowRegistration => "Créer un compte",
            Self::RequestCode => "Recevoir le code",
            Self::SubmitCode => "VALIDÉ",
            Self::ConfirmPayment => "VALIDÉ",
            Self::ShowServers => "Les serveurs",
            Self::ShowMenu => "Menu",
            Self::MenuAddTable => "AJOUTER UNE TABLE",
            Self::MenuAddServer => "AJOUTER UN SERVEUR",
            Self::MenuSubscriptionHistory => "HISTORIQUE D'ABONNEMENT",
            Self::SubmitServer => "ENREGISTRER",
            Self::AddTable => "Ajouter une table",
            Self::SubmitTable => "ENREGISTRER",
            Self::MenuAccountSettings => "PARAMÈTRES DU COMPTE",
            Self::ShowToday => "Aujourd'hui",
            Self::Logout => "SE DÉCONNECTER",
            Self::Back => "← Retour",
        }
    }

    /// Whether the action lives inside an overlay menu rather than on the screen.
    #[instrument]
    pub fn is_menu_item(self) -> bool {
        matches!(
            self,
            Self::MenuAddTable
                | Self::MenuAddServer
                | Self::MenuSubscriptionHistory
                | Self::MenuAccountSettings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_menu_items_are_prefixed() {
        for action in Action::iter() {
            let name: &'static str = action.into();
            assert_eq!(action.is_menu_item(), name.starts_with("menu-"), "{name}");
        }
    }

    #[test]
    fn test_every_action_has_label() {
        assert!(Action::iter().all(|a| !a.label().is_empty()));
    }
}
