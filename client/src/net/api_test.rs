use super::*;

#[test]
fn api_url_prefixes_backend_mount() {
    assert_eq!(api_url("/queue/"), "/api/queue/");
}

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header_value("abc123"), "Token abc123");
}

#[test]
fn resource_paths_keep_trailing_slashes() {
    assert_eq!(lodgement_path(4), "/lodgement/4/");
    assert_eq!(apply_path(2), "/queue/2/apply/");
    assert_eq!(application_path(9), "/application/9/");
    assert_eq!(application_action_path(9, "cancel"), "/application/9/cancel/");
    assert_eq!(user_edit_path(3), "/auth/user/3/edit/");
}

#[test]
fn upload_url_path_carries_document_query() {
    assert_eq!(
        upload_url_path(5, 11),
        "/application/5/submit-documents/presigned-url/?document_id=11"
    );
}

#[test]
fn error_message_prefers_error_then_detail() {
    assert_eq!(
        error_message_from_body(r#"{"error": "Queue not found"}"#),
        Some("Queue not found".to_owned())
    );
    assert_eq!(
        error_message_from_body(r#"{"detail": "Invalid token."}"#),
        Some("Invalid token.".to_owned())
    );
    assert_eq!(error_message_from_body("<html>502</html>"), None);
    assert_eq!(error_message_from_body(r#"{"error": "  "}"#), None);
}

#[test]
fn status_error_display_includes_backend_message() {
    let with_message = ApiError::Status { status: 400, message: Some("You already have an active application for this queue".to_owned()) };
    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(with_message.to_string(), "You already have an active application for this queue (400)");
    assert_eq!(bare.to_string(), "API call error: 500");
}

#[test]
fn not_found_maps_to_empty_list() {
    let missing: Result<Vec<i64>, ApiError> = Err(ApiError::Status { status: 404, message: None });
    assert_eq!(empty_on_not_found(missing), Ok(Vec::new()));

    let forbidden: Result<Vec<i64>, ApiError> = Err(ApiError::Status { status: 403, message: None });
    assert!(empty_on_not_found(forbidden).is_err());

    assert_eq!(empty_on_not_found(Ok(vec![1, 2])), Ok(vec![1, 2]));
}

#[test]
fn unauthorized_covers_missing_token_and_auth_statuses() {
    assert!(ApiError::MissingToken.is_unauthorized());
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 500, message: None }.is_unauthorized());
}

#[test]
fn review_body_encodes_decision_status_codes() {
    assert_eq!(
        review_body(8, "ok", ReviewDecision::Approve),
        serde_json::json!({ "application_id": 8, "system_message": "ok", "status": 3 })
    );
    assert_eq!(review_body(8, "", ReviewDecision::Reject)["status"], 4);
    assert_eq!(review_body(8, "", ReviewDecision::ReUpload)["status"], 5);
}

#[test]
fn review_failure_message_names_the_action() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(
        ReviewDecision::Reject.failure_message(&err),
        "An error occurred while rejecting the application: API call error: 500"
    );
}

#[test]
fn payloads_serialize_with_backend_field_names() {
    let answer = AnswerPayload { form_item_id: 3, answer: serde_json::json!(1) };
    let doc = DocumentSubmission { document_id: 2, description: "kimlik".to_owned(), file: "a@b-Kimlik".to_owned() };
    assert_eq!(serde_json::to_value(answer).unwrap(), serde_json::json!({ "form_item_id": 3, "answer": 1 }));
    assert_eq!(
        serde_json::to_value(doc).unwrap(),
        serde_json::json!({ "document_id": 2, "description": "kimlik", "file": "a@b-Kimlik" })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on_ready(fetch_me());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never actually suspends (the SSR stubs return immediately).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future unexpectedly pending"),
    }
}
