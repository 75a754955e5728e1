//! Screen Navigation Integration Tests
//!
//! Taps on rendered screens flowing through dispatch into the navigator,
//! the shell's tab stacks, and path routing.

use app_ui::{
    dispatch, light_tokens, render_route, Action, NavigationError, NavigationTab, Navigator,
    Node, Route, Router, Shell, ThemeMode, ThemeStore,
};
use mockall::predicate::eq;

mockall::mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn push(&mut self, route: Route);
        fn back(&mut self);
        fn switch_tab(&mut self, tab: NavigationTab);
    }
}

fn has_tab_bar(node: &Node) -> bool {
    node.actions()
        .iter()
        .any(|action| matches!(action, Action::SwitchTab(_)))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Navigate actions push their route and nothing else
#[test]
fn test_dispatch_navigate_pushes_route() {
    let store = ThemeStore::default();
    let mut nav = MockNav::new();
    nav.expect_push()
        .with(eq(Route::doctor(1)))
        .times(1)
        .return_const(());
    nav.expect_back().never();
    nav.expect_switch_tab().never();

    dispatch(&Action::Navigate(Route::doctor(1)), &store, &mut nav);
    assert_eq!(store.mode(), ThemeMode::Light);
}

/// Back and tab actions reach the navigator
#[test]
fn test_dispatch_back_and_switch_tab() {
    let store = ThemeStore::default();
    let mut nav = MockNav::new();
    nav.expect_back().times(1).return_const(());
    nav.expect_switch_tab()
        .with(eq(NavigationTab::Profile))
        .times(1)
        .return_const(());
    nav.expect_push().never();

    dispatch(&Action::Back, &store, &mut nav);
    dispatch(&Action::SwitchTab(NavigationTab::Profile), &store, &mut nav);
}

/// The theme toggle touches the store, never the navigator
#[test]
fn test_dispatch_toggle_theme_skips_navigator() {
    let store = ThemeStore::default();
    let mut nav = MockNav::new();
    nav.expect_push().never();
    nav.expect_back().never();
    nav.expect_switch_tab().never();

    dispatch(&Action::ToggleTheme, &store, &mut nav);
    assert_eq!(store.mode(), ThemeMode::Dark);
}

/// Every tap target on the Explorer screen reaches the navigator or the store
#[test]
fn test_explorer_actions_dispatch() {
    let store = ThemeStore::default();
    let node = render_route(&Route::Explorer, &store.tokens());
    let actions: Vec<Action> = node.actions().into_iter().cloned().collect();
    let pushes = actions
        .iter()
        .filter(|a| matches!(a, Action::Navigate(_)))
        .count();

    let mut nav = MockNav::new();
    nav.expect_push().times(pushes).return_const(());
    nav.expect_back().never();
    nav.expect_switch_tab().never();

    for action in &actions {
        dispatch(action, &store, &mut nav);
    }
    // the screen carries exactly one theme toggle
    assert_eq!(store.mode(), ThemeMode::Dark);
}

// =============================================================================
// Shell
// =============================================================================

/// Tab switches keep each tab's stack
#[test]
fn test_shell_tabs_keep_their_stacks() {
    let mut shell = Shell::new(ThemeStore::default());
    assert_eq!(shell.current_route(), &Route::Explorer);

    shell.dispatch(&Action::Navigate(Route::doctor(1)));
    shell.dispatch(&Action::SwitchTab(NavigationTab::LabTests));
    assert_eq!(shell.current_route(), &Route::LabTests);

    shell.dispatch(&Action::SwitchTab(NavigationTab::Explorer));
    assert_eq!(shell.current_route(), &Route::doctor(1));
    assert_eq!(
        shell.navigation().stack(NavigationTab::LabTests).depth(),
        1
    );
}

/// Explorer to doctor detail and back
#[test]
fn test_shell_detail_round_trip() {
    let mut shell = Shell::new(ThemeStore::default());

    let explorer = shell.render_current();
    assert!(has_tab_bar(&explorer));
    let tap = explorer
        .actions()
        .into_iter()
        .find(|a| **a == Action::Navigate(Route::doctor(1)))
        .cloned()
        .unwrap();

    shell.dispatch(&tap);
    let detail = shell.render_current();
    assert!(!has_tab_bar(&detail));
    assert!(detail.find_text("Doctor Profile").is_some());
    assert!(detail.find_text("Book Consultation").is_some());

    let back = detail
        .actions()
        .into_iter()
        .find(|a| **a == Action::Back)
        .cloned()
        .unwrap();
    shell.dispatch(&back);
    assert_eq!(shell.current_route(), &Route::Explorer);
    assert!(!shell.navigation().can_go_back());

    // back at the root stays put
    shell.dispatch(&Action::Back);
    assert_eq!(shell.current_route(), &Route::Explorer);
}

/// Navigating to a tab root switches to that tab at its root
#[test]
fn test_shell_navigate_to_tab_root_resets() {
    let mut shell = Shell::new(ThemeStore::default());
    shell.dispatch(&Action::SwitchTab(NavigationTab::Profile));
    shell.dispatch(&Action::Navigate(Route::Wallet));
    shell.dispatch(&Action::SwitchTab(NavigationTab::Explorer));

    shell.dispatch(&Action::Navigate(Route::Profile));
    assert_eq!(shell.current_route(), &Route::Profile);
    assert!(!shell.navigation().can_go_back());
}

/// Toggling from a detail screen re-themes the tab screens once
#[test]
fn test_shell_toggle_from_detail() {
    let mut shell = Shell::new(ThemeStore::default());
    shell.dispatch(&Action::Navigate(Route::diagnostic_center(1)));
    shell.dispatch(&Action::ToggleTheme);

    let detail = shell.render_current();
    assert_eq!(
        detail.style().and_then(|s| s.background_color.as_deref()),
        Some("#0F172A")
    );

    shell.dispatch(&Action::Back);
    shell.render_current();
    shell.render_current();
    assert_eq!(shell.derivations(), [2, 2, 2, 2]);
}

/// Routes without a screen fall back to the not-found screen
#[test]
fn test_unbuilt_routes_render_not_found() {
    let tokens = light_tokens();
    for route in [Route::Wallet, Route::test_category(3), Route::NotFound] {
        let node = render_route(&route, &tokens);
        assert!(node.find_text(route.title()).is_some());
        assert!(node.find_text("This screen is not available yet.").is_some());
        assert_eq!(
            node.actions(),
            vec![&Action::Navigate(Route::Explorer)]
        );
    }
}

// =============================================================================
// Routing
// =============================================================================

/// Paths resolve to routes, including the doctor alias
#[test]
fn test_router_resolves_paths() {
    let router = Router::new();
    assert_eq!(router.resolve("/"), Ok(Route::Explorer));
    assert_eq!(router.resolve("/doctor/1"), Ok(Route::doctor(1)));
    assert_eq!(router.resolve("/doctors/1"), Ok(Route::doctor(1)));
    assert_eq!(
        router.resolve("/specialty/eye-specialist"),
        Ok(Route::specialty("eye-specialist"))
    );
    assert_eq!(
        router.resolve("/diagnostic-center/2?ref=home"),
        Ok(Route::diagnostic_center(2))
    );
}

/// Resolution failures say why
#[test]
fn test_router_errors() {
    let router = Router::new();
    assert_eq!(
        router.resolve("/nowhere"),
        Err(NavigationError::UnknownPath("/nowhere".to_string()))
    );
    assert_eq!(
        router.resolve("/doctor/%FF"),
        Err(NavigationError::InvalidParam("%FF".to_string()))
    );
    assert_eq!(router.match_path("/nowhere"), Route::NotFound);
}

/// Every route's path resolves back to it
#[test]
fn test_route_paths_resolve() {
    let router = Router::new();
    let routes = [
        Route::LabTests,
        Route::Consult,
        Route::Profile,
        Route::Doctors,
        Route::Specializations,
        Route::DiagnosticCenters,
        Route::test_category(4),
        Route::Wallet,
        Route::Settings,
    ];
    for route in routes {
        assert_eq!(router.resolve(&route.to_path()), Ok(route));
    }
}
