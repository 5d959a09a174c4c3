use super::*;

#[test]
fn default_is_loading() {
    let state: Loadable<Vec<i64>> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
}

#[test]
fn ok_result_becomes_ready() {
    let state = Loadable::from_result(Ok(vec![1, 2]));
    assert_eq!(state.ready(), Some(&vec![1, 2]));
}

#[test]
fn error_result_keeps_display_message() {
    let state: Loadable<()> = Loadable::from_result(Err(ApiError::Status { status: 500, message: None }));
    assert_eq!(state, Loadable::Failed("API call error: 500".to_owned()));
}
