//! Tests for the navigator's state transitions and menu flags.

use resto_pager::{Action, MenuPolicy, NavigationState, Navigator, Overlay, Screen};

#[test]
fn test_back_from_header_screens_returns_to_welcome() {
    for screen in Screen::all().filter(|s| s.uses_header_back()) {
        let mut nav = Navigator::starting_at(screen, MenuPolicy::Persist);
        assert_eq!(nav.dispatch(Action::Back), Some(Screen::Welcome), "{screen}");
        assert_eq!(nav.current_state().current_screen, Screen::Welcome);
    }
}

#[test]
fn test_back_from_own_header_screens() {
    let cases = [
        (Screen::Tables, Screen::ServersEmpty),
        (Screen::AddTable, Screen::Tables),
        (Screen::SubscriptionHistory, Screen::ServersEmpty),
    ];
    for (from, to) in cases {
        let mut nav = Navigator::starting_at(from, MenuPolicy::Persist);
        assert_eq!(nav.dispatch(Action::Back), Some(to), "{from}");
    }
}

#[test]
fn test_toggle_account_menu_twice_restores() {
    let mut nav = Navigator::new();
    nav.toggle_account_menu();
    assert!(nav.current_state().account_menu_open);
    nav.toggle_account_menu();
    assert_eq!(nav.current_state(), NavigationState::initial());
}

#[test]
fn test_toggle_server_menu_twice_restores() {
    let mut nav = Navigator::starting_at(Screen::ServersList, MenuPolicy::Persist);
    let before = nav.current_state();
    nav.toggle_server_menu();
    assert!(nav.current_state().server_menu_open);
    nav.toggle_server_menu();
    assert_eq!(nav.current_state(), before);
}

#[test]
fn test_menu_flags_are_independent() {
    let mut nav = Navigator::new();
    nav.toggle_overlay(Overlay::Account);
    nav.toggle_overlay(Overlay::Servers);
    let state = nav.current_state();
    assert!(state.account_menu_open);
    assert!(state.server_menu_open);
    assert_eq!(state.current_screen, Screen::Welcome);

    nav.toggle_overlay(Overlay::Servers);
    assert!(nav.current_state().account_menu_open);
    assert!(!nav.current_state().server_menu_open);
}

#[test]
fn test_go_to_every_screen_keeps_menu_flags() {
    for (account, server) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut nav = Navigator::new();
        if account {
            nav.toggle_account_menu();
        }
        if server {
            nav.toggle_server_menu();
        }
        for screen in Screen::all() {
            nav.go_to(screen);
            let state = nav.current_state();
            assert_eq!(state.current_screen, screen);
            assert_eq!(state.account_menu_open, account);
            assert_eq!(state.server_menu_open, server);
        }
    }
}

#[test]
fn test_go_to_named_unknown_leaves_state() {
    let mut nav = Navigator::starting_at(Screen::Tables, MenuPolicy::Persist);
    nav.toggle_account_menu();
    let before = nav.current_state();

    let err = nav.go_to_named("kitchen").unwrap_err();
    assert_eq!(err.name, "kitchen");
    assert_eq!(nav.current_state(), before);
}

#[test]
fn test_go_to_named_valid() {
    let mut nav = Navigator::new();
    nav.go_to_named("subscription-history").unwrap();
    assert_eq!(nav.current_state().current_screen, Screen::SubscriptionHistory);
}

#[test]
fn test_registration_then_payment_scenario() {
    let mut nav = Navigator::new();
    nav.go_to(Screen::Payment);
    nav.go_to(Screen::ServersEmpty);
    assert_eq!(
        nav.current_state(),
        NavigationState {
            current_screen: Screen::ServersEmpty,
            account_menu_open: false,
            server_menu_open: false,
        }
    );
}

#[test]
fn test_server_menu_survives_navigation() {
    let mut nav = Navigator::starting_at(Screen::ServersEmpty, MenuPolicy::Persist);
    nav.toggle_server_menu();
    nav.go_to(Screen::AddServer);
    nav.go_to(Screen::ServersList);
    let state = nav.current_state();
    assert_eq!(state.current_screen, Screen::ServersList);
    assert!(state.server_menu_open);
    assert_eq!(state.visible_overlay(), Some(Overlay::Servers));
}

#[test]
fn test_close_on_navigate_clears_menus() {
    let mut nav = Navigator::starting_at(Screen::ServersEmpty, MenuPolicy::CloseOnNavigate);
    nav.toggle_server_menu();
    nav.toggle_account_menu();
    nav.dispatch(Action::MenuAddServer);
    let state = nav.current_state();
    assert_eq!(state.current_screen, Screen::AddServer);
    assert!(!state.server_menu_open);
    assert!(!state.account_menu_open);
}

#[test]
fn test_add_table_submit_scenario() {
    let mut nav = Navigator::starting_at(Screen::Tables, MenuPolicy::Persist);
    nav.go_to(Screen::AddTable);
    assert_eq!(nav.dispatch(Action::SubmitTable), Some(Screen::Tables));
    assert_eq!(nav.current_state().current_screen, Screen::Tables);
}

#[test]
fn test_full_onboarding_by_dispatch() {
    let mut nav = Navigator::new();
    nav.dispatch(Action::ShowLogin);
    nav.dispatch(Action::RequestCode);
    nav.dispatch(Action::SubmitCode);
    nav.dispatch(Action::ShowServers);
    nav.toggle_server_menu();
    nav.dispatch(Action::MenuSubscriptionHistory);
    assert_eq!(
        nav.current_state().current_screen,
        Screen::SubscriptionHistory
    );
}

#[test]
fn test_logout_returns_to_welcome() {
    let mut nav = Navigator::starting_at(Screen::Account, MenuPolicy::Persist);
    nav.toggle_account_menu();
    nav.dispatch(Action::MenuAccountSettings);
    assert_eq!(nav.dispatch(Action::Logout), Some(Screen::Welcome));
}
