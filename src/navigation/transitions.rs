//! The transition graph: which action leads where from which screen.

use strum::IntoEnumIterator;
use tracing::instrument;

use super::action::Action;
use super::screen::Screen;

/// One edge of the navigation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Screen the action is offered on.
    pub from: Screen,
    /// The activation.
    pub action: Action,
    /// Screen the action leads to.
    pub to: Screen,
}

/// Read-only mapping from `(screen, action)` to destination screen.
///
/// The mapping is a single `match`, so adding a screen or action forces a
/// decision here at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionTable;

impl TransitionTable {
    /// Creates the table.
    pub fn new() -> Self {
        Self
    }

    /// Destination of `action` taken on `from`, or `None` if the screen does not offer it.
    #[instrument(skip(self))]
    pub fn destination(&self, from: Screen, action: Action) -> Option<Screen> {
        use Action as A;
        use Screen as S;

        match (from, action) {
            (S::Welcome, A::SubmitRegistration) => Some(S::Payment),
            (S::Welcome, A::ShowLogin) => Some(S::Login),

            (S::Login, A::ShowRegistration) => Some(S::Welcome),
            (S::Login, A::RequestCode) => Some(S::Verification),

            (S::Verification, A::ShowLogin) => Some(S::Login),
            (S::Verification, A::ShowRegistration) => Some(S::Welcome),
            (S::Verification, A::SubmitCode) => Some(S::ServersEmpty),

            (S::Payment, A::ConfirmPayment) => Some(S::ServersEmpty),

            (S::ServersEmpty, A::ShowServers) => Some(S::ServersList),
            (S::ServersList, A::ShowMenu) => Some(S::ServersEmpty),
            (S::ServersEmpty | S::ServersList, A::MenuAddTable) => Some(S::Tables),
            (S::ServersEmpty | S::ServersList, A::MenuAddServer) => Some(S::AddServer),
            (S::ServersEmpty | S::ServersList, A::MenuSubscriptionHistory) => {
                Some(S::SubscriptionHistory)
            }

            (S::AddServer, A::SubmitServer) => Some(S::ServersList),

            (S::Tables, A::AddTable) => Some(S::AddTable),
            (S::AddTable, A::SubmitTable) => Some(S::Tables),

            (S::Account, A::MenuAccountSettings) => Some(S::ProfileSettings),
            (S::Account, A::ShowToday) => Some(S::Activity),

            (S::ProfileSettings, A::Logout) => Some(S::Welcome),

            (screen, A::Back) => screen.back_target(),

            _ => None,
        }
    }

    /// Actions offered on `screen`, in declaration order.
    #[instrument(skip(self))]
    pub fn actions_for(&self, screen: Screen) -> Vec<Action> {
        Action::iter()
            .filter(|action| self.destination(screen, *action).is_some())
            .collect()
    }

    /// Every edge of the graph, grouped by source screen.
    #[instrument(skip(self))]
    pub fn edges(&self) -> Vec<Transition> {
        Screen::iter()
            .flat_map(|from| {
                Action::iter().filter_map(move |action| {
                    self.destination(from, action)
                        .map(|to| Transition { from, action, to })
                })
            })
            .collect()
    }
}
