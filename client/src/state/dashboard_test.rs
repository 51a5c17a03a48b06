use super::*;

// =============================================================
// PageKey
// =============================================================

#[test]
fn default_page_is_dashboard() {
    assert_eq!(DashboardState::default().active_page, PageKey::Dashboard);
}

#[test]
fn page_keys_round_trip_and_are_distinct() {
    for page in PageKey::ALL {
        assert_eq!(PageKey::from_key(page.key()), Some(page));
    }
    for (i, a) in PageKey::ALL.iter().enumerate() {
        for (j, b) in PageKey::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.key(), b.key());
            }
        }
    }
    assert_eq!(PageKey::from_key("CreateAccount"), None);
}

#[test]
fn navigation_lists_cover_every_page_once() {
    let mut listed: Vec<PageKey> = NAV_PAGES.iter().chain(ACCOUNT_PAGES.iter()).copied().collect();
    listed.sort_by_key(|p| p.key());
    let mut all = PageKey::ALL.to_vec();
    all.sort_by_key(|p| p.key());
    assert_eq!(listed, all);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_sets_exactly_the_clicked_page() {
    let mut state = DashboardState::default();
    for page in PageKey::ALL {
        state.select(page);
        assert_eq!(state.active_page.key(), page.key());
        let active = PageKey::ALL.iter().filter(|p| state.is_active(**p)).count();
        assert_eq!(active, 1);
    }
}

#[test]
fn select_does_not_touch_collapse_flag() {
    let mut state = DashboardState { collapsed: true, ..DashboardState::default() };
    state.select(PageKey::Reports);
    assert!(state.collapsed);
}

// =============================================================
// Collapse
// =============================================================

#[test]
fn toggling_collapse_twice_restores_width_class() {
    let mut state = DashboardState::default();
    let original = state.sidebar_width_class();
    assert_eq!(original, SIDEBAR_EXPANDED_CLASS);

    state.toggle_collapsed();
    assert_eq!(state.sidebar_width_class(), SIDEBAR_COLLAPSED_CLASS);

    state.toggle_collapsed();
    assert_eq!(state.sidebar_width_class(), original);
}

#[test]
fn collapse_is_independent_of_active_page() {
    let mut state = DashboardState::default();
    state.select(PageKey::Uploads);
    state.toggle_collapsed();
    assert_eq!(state.active_page, PageKey::Uploads);
}

// =============================================================
// Account actions
// =============================================================

#[test]
fn cancel_leaves_state_unchanged_apart_from_dialog() {
    for action in AccountAction::ALL {
        let mut state = DashboardState::default();
        state.select(PageKey::MapView);
        let before = state.clone();

        state.request(action);
        assert_eq!(state.pending_action, Some(action));

        state.cancel();
        assert_eq!(state, before);
    }
}

#[test]
fn confirm_logout_targets_login() {
    let mut state = DashboardState::default();
    state.request(AccountAction::Logout);
    assert_eq!(state.confirm(), Some(AppRoute::Login));
    assert_eq!(state.pending_action, None);
}

#[test]
fn confirm_create_account_targets_signup() {
    let mut state = DashboardState::default();
    state.request(AccountAction::CreateAccount);
    assert_eq!(state.confirm().map(AppRoute::path), Some("/signup"));
}

#[test]
fn confirm_without_open_dialog_is_none() {
    let mut state = DashboardState::default();
    assert_eq!(state.confirm(), None);
}

#[test]
fn account_action_copy() {
    assert_eq!(AccountAction::Logout.title(), "Confirm Logout");
    assert_eq!(AccountAction::Logout.confirm_label(), "Logout");
    assert_eq!(AccountAction::CreateAccount.title(), "Create New Account?");
    assert_eq!(AccountAction::CreateAccount.confirm_label(), "Continue");
    assert_eq!(AccountAction::CreateAccount.label(), "Create Account");
}
