//! REST API helpers for the external lodging backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent to `/api/...`
//! on the portal origin, which forwards them to the backend.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into inline `Error: ...` text without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{Announcement, Application, ApplicationStatus, FaqEntry, Lodgement, Queue, Role, User};

#[cfg(any(test, feature = "hydrate"))]
const API_PREFIX: &str = "/api";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{}", status_text(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// An authenticated endpoint was called without a stored token.
    #[error("not signed in")]
    MissingToken,

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. } | Self::MissingToken)
    }
}

fn status_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("{message} ({status})"),
        None => format!("API call error: {status}"),
    }
}

/// Pull the human message out of a backend error body.
///
/// The backend reports failures as `{"error": "..."}`; framework-level
/// rejections (auth, permissions) use `{"detail": "..."}`.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToOwned::to_owned)
}

/// The backend answers 404 instead of `[]` for a few empty collections.
fn empty_on_not_found<T>(result: Result<Vec<T>, ApiError>) -> Result<Vec<T>, ApiError> {
    match result {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_header_value(token: &str) -> String {
    format!("Token {token}")
}

fn lodgement_path(id: i64) -> String {
    format!("/lodgement/{id}/")
}

fn apply_path(queue_id: i64) -> String {
    format!("/queue/{queue_id}/apply/")
}

fn application_path(id: i64) -> String {
    format!("/application/{id}/")
}

fn application_action_path(id: i64, action: &str) -> String {
    format!("/application/{id}/{action}/")
}

fn upload_url_path(application_id: i64, document_id: i64) -> String {
    format!("/application/{application_id}/submit-documents/presigned-url/?document_id={document_id}")
}

fn user_edit_path(id: i64) -> String {
    format!("/auth/user/{id}/edit/")
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// One answered scoring-form item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerPayload {
    pub form_item_id: i64,
    pub answer: serde_json::Value,
}

/// Metadata for a file already PUT to object storage.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentSubmission {
    pub document_id: i64,
    pub description: String,
    /// Object-storage key of the uploaded file.
    pub file: String,
}

/// Manager verdict on a pending application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
    ReUpload,
}

impl ReviewDecision {
    #[must_use]
    pub fn status(self) -> ApplicationStatus {
        match self {
            Self::Approve => ApplicationStatus::Approved,
            Self::Reject => ApplicationStatus::Rejected,
            Self::ReUpload => ApplicationStatus::ReUpload,
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Approve => "Application approved successfully",
            Self::Reject => "Application rejected successfully",
            Self::ReUpload => "Application status set to re-upload successfully",
        }
    }

    #[must_use]
    pub fn failure_message(self, err: &ApiError) -> String {
        let action = match self {
            Self::Approve => "approving the application",
            Self::Reject => "rejecting the application",
            Self::ReUpload => "setting the application status to re-upload",
        };
        format!("An error occurred while {action}: {err}")
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(serde::Deserialize)]
struct UploadUrlResponse {
    url: String,
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

/// Send a request and decode a JSON response body.
async fn call<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    authenticated: bool,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(method, path, body, authenticated).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body, authenticated);
        Err(ApiError::Unavailable)
    }
}

/// Send a request whose response body is not needed.
async fn call_discarding(method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(method, path, body, true).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    authenticated: bool,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = api_url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Patch => Request::patch(&url),
    }
    .header("Content-Type", "application/json");

    match crate::util::session::load_token() {
        Some(token) => builder = builder.header("Authorization", &auth_header_value(&token)),
        None if authenticated => return Err(ApiError::MissingToken),
        None => {}
    }

    let sent = match body {
        Some(payload) => builder.json(&payload).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        log::warn!("{method:?} {url} -> {status}");
        return Err(ApiError::Status { status, message: error_message_from_body(&text) });
    }
    Ok(resp)
}

fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH & USERS
// =============================================================================

/// Exchange credentials for an API token via `POST /auth/login/`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = to_body(&LoginRequest { email, password })?;
    let resp: LoginResponse = call(Method::Post, "/auth/login/", Some(body), false).await?;
    Ok(resp.token)
}

/// Fetch the signed-in user from `GET /auth/me/`.
///
/// # Errors
///
/// Returns an error if no token is stored or the backend rejects it.
pub async fn fetch_me() -> Result<User, ApiError> {
    call(Method::Get, "/auth/me/", None, true).await
}

/// List every portal account (admin only).
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    call(Method::Get, "/auth/user/", None, true).await
}

/// Change a user's role via `PATCH /auth/user/{id}/edit/`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_user_role(user_id: i64, role: Role) -> Result<User, ApiError> {
    let body = serde_json::json!({ "role": role.code() });
    call(Method::Patch, &user_edit_path(user_id), Some(body), true).await
}

// =============================================================================
// LODGEMENTS & QUEUES
// =============================================================================

/// Public lodgement catalogue.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_lodgements() -> Result<Vec<Lodgement>, ApiError> {
    call(Method::Get, "/lodgement/list/", None, false).await
}

/// Lodgement inventory for managers.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_inventory() -> Result<Vec<Lodgement>, ApiError> {
    call(Method::Get, "/lodgement/", None, true).await
}

/// Create a lodgement from a validated inventory payload.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_lodgement(payload: serde_json::Value) -> Result<Lodgement, ApiError> {
    call(Method::Post, "/lodgement/", Some(payload), true).await
}

/// Patch an existing lodgement.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_lodgement(id: i64, payload: serde_json::Value) -> Result<Lodgement, ApiError> {
    call(Method::Patch, &lodgement_path(id), Some(payload), true).await
}

/// Queues the signed-in user is eligible for. Empty when the backend has none.
///
/// # Errors
///
/// Returns an error if the request fails for any reason other than "none found".
pub async fn list_queues() -> Result<Vec<Queue>, ApiError> {
    empty_on_not_found(call(Method::Get, "/queue/", None, true).await)
}

/// Open a new application in `queue_id`.
///
/// # Errors
///
/// Returns an error if the request fails or an active application already exists.
pub async fn apply_to_queue(queue_id: i64) -> Result<Application, ApiError> {
    call(Method::Post, &apply_path(queue_id), None, true).await
}

// =============================================================================
// APPLICATIONS (APPLICANT)
// =============================================================================

/// The signed-in user's applications. Empty when the backend has none.
///
/// # Errors
///
/// Returns an error if the request fails for any reason other than "none found".
pub async fn list_my_applications() -> Result<Vec<Application>, ApiError> {
    empty_on_not_found(call(Method::Get, "/application/", None, true).await)
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_application(id: i64) -> Result<Application, ApiError> {
    call(Method::Get, &application_path(id), None, true).await
}

/// # Errors
///
/// Returns an error if the request fails or the application is finalized.
pub async fn cancel_application(id: i64) -> Result<Application, ApiError> {
    call(Method::Post, &application_action_path(id, "cancel"), None, true).await
}

/// Save scoring-form answers.
///
/// # Errors
///
/// Returns an error if the request fails or an answer has the wrong type.
pub async fn submit_scoring_form(id: i64, answers: &[AnswerPayload]) -> Result<Application, ApiError> {
    let body = to_body(&answers)?;
    call(Method::Post, &application_action_path(id, "submit-scoring-form"), Some(body), true).await
}

/// Ask the backend for a presigned object-storage URL for one document.
///
/// # Errors
///
/// Returns an error if the request fails or the application no longer accepts documents.
pub async fn request_upload_url(application_id: i64, document_id: i64) -> Result<String, ApiError> {
    let resp: UploadUrlResponse = call(Method::Get, &upload_url_path(application_id, document_id), None, true).await?;
    Ok(resp.url)
}

/// Record uploaded files against the application.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn submit_documents(application_id: i64, docs: &[DocumentSubmission]) -> Result<Application, ApiError> {
    let body = to_body(&docs)?;
    call(Method::Post, &application_action_path(application_id, "submit-documents"), Some(body), true).await
}

/// PUT a file straight to object storage through a presigned URL.
///
/// No portal auth header is attached; the URL itself carries the grant.
///
/// # Errors
///
/// Returns an error if the upload fails or storage rejects it.
#[cfg(feature = "hydrate")]
pub async fn upload_to_storage(url: &str, file: &web_sys::File) -> Result<(), ApiError> {
    let mut builder = gloo_net::http::Request::put(url);
    let content_type = file.type_();
    if !content_type.is_empty() {
        builder = builder.header("Content-Type", &content_type);
    }
    let resp = builder
        .body(file.clone())
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status(), message: Some("storage upload rejected".to_owned()) });
    }
    Ok(())
}

// =============================================================================
// APPLICATIONS (REVIEW)
// =============================================================================

/// Applications waiting for a manager decision.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_review_queue() -> Result<Vec<Application>, ApiError> {
    call(Method::Get, "/application/waiting-for-review/", None, true).await
}

/// Fetch any application by id for review.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_review_application(id: i64) -> Result<Application, ApiError> {
    let body = serde_json::json!({ "application_id": id });
    call(Method::Post, "/application/get/", Some(body), true).await
}

/// Record a review decision with an optional message to the applicant.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn review_application(id: i64, message: &str, decision: ReviewDecision) -> Result<(), ApiError> {
    call_discarding(Method::Post, "/application/review/", Some(review_body(id, message, decision))).await
}

fn review_body(id: i64, message: &str, decision: ReviewDecision) -> serde_json::Value {
    serde_json::json!({
        "application_id": id,
        "system_message": message,
        "status": decision.status().code(),
    })
}

// =============================================================================
// CONTENT
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_announcements() -> Result<Vec<Announcement>, ApiError> {
    call(Method::Get, "/announcement/", None, false).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_faq() -> Result<Vec<FaqEntry>, ApiError> {
    call(Method::Get, "/faq/", None, false).await
}
