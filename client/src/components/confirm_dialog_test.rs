use super::*;
use crate::state::dashboard::DashboardState;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", " ", "Tab", "escape", "e", ""] {
        assert!(!is_dismiss_key(key), "{key:?}");
    }
}

#[test]
fn dismiss_key_then_cancel_leaves_dashboard_untouched() {
    let mut state = DashboardState::default();
    state.request(AccountAction::Logout);
    let before = DashboardState { pending_action: None, ..state.clone() };

    if is_dismiss_key("Escape") {
        state.cancel();
    }

    assert_eq!(state, before);
    assert_eq!(state.confirm(), None);
}
