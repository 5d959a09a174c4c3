use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert_eq!(state.role(), None);
}

#[test]
fn auth_state_role_follows_user() {
    let state = AuthState { user: Some(User { id: 1, role: Role::Admin, ..User::default() }), loading: false };
    assert!(state.is_logged_in());
    assert_eq!(state.role(), Some(Role::Admin));
}
