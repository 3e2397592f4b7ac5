//! Tests for the navigation graph.

use std::collections::HashSet;

use resto_pager::{Action, Screen, Transition, TransitionTable};

const FORWARD_EDGES: &[(Screen, Action, Screen)] = &[
    (Screen::Welcome, Action::SubmitRegistration, Screen::Payment),
    (Screen::Welcome, Action::ShowLogin, Screen::Login),
    (Screen::Login, Action::ShowRegistration, Screen::Welcome),
    (Screen::Login, Action::RequestCode, Screen::Verification),
    (Screen::Verification, Action::ShowLogin, Screen::Login),
    (Screen::Verification, Action::ShowRegistration, Screen::Welcome),
    (Screen::Verification, Action::SubmitCode, Screen::ServersEmpty),
    (Screen::Payment, Action::ConfirmPayment, Screen::ServersEmpty),
    (Screen::ServersEmpty, Action::ShowServers, Screen::ServersList),
    (Screen::ServersEmpty, Action::MenuAddTable, Screen::Tables),
    (Screen::ServersEmpty, Action::MenuAddServer, Screen::AddServer),
    (Screen::ServersEmpty, Action::MenuSubscriptionHistory, Screen::SubscriptionHistory),
    (Screen::ServersList, Action::ShowMenu, Screen::ServersEmpty),
    (Screen::ServersList, Action::MenuAddTable, Screen::Tables),
    (Screen::ServersList, Action::MenuAddServer, Screen::AddServer),
    (Screen::ServersList, Action::MenuSubscriptionHistory, Screen::SubscriptionHistory),
    (Screen::AddServer, Action::SubmitServer, Screen::ServersList),
    (Screen::Tables, Action::AddTable, Screen::AddTable),
    (Screen::AddTable, Action::SubmitTable, Screen::Tables),
    (Screen::Account, Action::MenuAccountSettings, Screen::ProfileSettings),
    (Screen::Account, Action::ShowToday, Screen::Activity),
    (Screen::ProfileSettings, Action::Logout, Screen::Welcome),
];

#[test]
fn test_forward_edges() {
    let table = TransitionTable::new();
    for &(from, action, to) in FORWARD_EDGES {
        assert_eq!(table.destination(from, action), Some(to), "{from} --{action}-->");
    }
}

#[test]
fn test_edges_are_forward_plus_back() {
    let table = TransitionTable::new();
    let edges = table.edges();

    let forward: HashSet<(Screen, Action, Screen)> = FORWARD_EDGES.iter().copied().collect();
    let listed: HashSet<(Screen, Action, Screen)> = edges
        .iter()
        .filter(|e| e.action != Action::Back)
        .map(|e| (e.from, e.action, e.to))
        .collect();
    assert_eq!(listed, forward);

    let back_count = edges.iter().filter(|e| e.action == Action::Back).count();
    assert_eq!(back_count, Screen::COUNT - 1);
}

#[test]
fn test_edges_grouped_by_source() {
    let edges = TransitionTable::new().edges();
    let first = edges.first().copied();
    assert_eq!(
        first,
        Some(Transition {
            from: Screen::Welcome,
            action: Action::SubmitRegistration,
            to: Screen::Payment,
        })
    );
    let sources: Vec<Screen> = edges.iter().map(|e| e.from).collect();
    let mut sorted = sources.clone();
    sorted.sort_by_key(|s| *s as usize);
    assert_eq!(sources, sorted);
}

#[test]
fn test_account_branch_unreachable_from_welcome() {
    let table = TransitionTable::new();
    let mut seen = HashSet::from([Screen::Welcome]);
    let mut frontier = vec![Screen::Welcome];
    while let Some(screen) = frontier.pop() {
        for action in table.actions_for(screen) {
            if let Some(next) = table.destination(screen, action)
                && seen.insert(next)
            {
                frontier.push(next);
            }
        }
    }
    let unreachable: HashSet<Screen> = Screen::all().filter(|s| !seen.contains(s)).collect();
    assert_eq!(unreachable, HashSet::from([Screen::Account, Screen::Activity, Screen::ProfileSettings]));
}

#[test]
fn test_activity_only_offers_back() {
    let table = TransitionTable::new();
    assert_eq!(table.actions_for(Screen::Activity), [Action::Back]);
}
