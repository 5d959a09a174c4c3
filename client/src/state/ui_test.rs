use super::*;

#[test]
fn ui_state_default_has_no_toast() {
    let state = UiState::default();
    assert!(state.toast.is_none());
    assert_eq!(state.toast_seq, 0);
}

#[test]
fn push_toast_replaces_previous_and_bumps_seq() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "saved");
    let second = state.push_toast(ToastKind::Error, "failed");
    assert_eq!((first, second), (1, 2));
    let toast = state.toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "failed");
}

#[test]
fn stale_expiry_keeps_newer_toast() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Info, "one");
    state.push_toast(ToastKind::Info, "two");
    state.expire_toast(first);
    assert_eq!(state.toast.as_ref().map(|t| t.message.as_str()), Some("two"));
}

#[test]
fn matching_expiry_hides_toast() {
    let mut state = UiState::default();
    let seq = state.push_toast(ToastKind::Warning, "careful");
    state.expire_toast(seq);
    assert!(state.toast.is_none());
}

#[test]
fn dismiss_hides_any_toast() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Success, "ok");
    state.dismiss_toast();
    assert!(state.toast.is_none());
}

#[test]
fn toast_kinds_map_to_css_modifiers() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}
