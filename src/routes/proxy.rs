//! Forwarding proxy from `/api/*` to the external REST backend.
//!
//! DESIGN
//! ======
//! Requests are replayed verbatim (method, query, body, end-to-end headers)
//! against `{BACKEND_URL}/api/{path}`; the backend's status, body and
//! end-to-end headers come back unchanged. Only transport failures are
//! translated: unreachable backend -> 502, timeout -> 504.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::state::AppState;

/// Largest request body forwarded to the backend (document metadata and forms
/// are small; files go straight to object storage).
pub const MAX_FORWARD_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Connection-scoped headers that must not cross the proxy, plus `host` and
/// `content-length` which the outgoing side recomputes.
#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend timed out")]
    Timeout,
    #[error("request body rejected: {0}")]
    BadRequestBody(String),
    #[error("invalid backend response: {0}")]
    BadResponse(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) | Self::BadResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::BadRequestBody(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Backend URL for a forwarded request.
#[must_use]
pub fn backend_url(base: &str, rest: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/{}", base.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Still-encoded request path below `/api/`.
///
/// Taken from the raw URI rather than the decoded route capture so `%2F`
/// and `%3F` reach the backend unchanged.
#[must_use]
pub fn forwarded_path(uri_path: &str) -> &str {
    uri_path.strip_prefix("/api/").unwrap_or_else(|| uri_path.trim_start_matches('/'))
}

/// Copy of `headers` without hop-by-hop entries.
#[must_use]
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_hop_by_hop(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*rest}`
///
/// # Errors
///
/// Returns a 502/504 response when the backend cannot be reached in time.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = backend_url(&state.config.backend_url, forwarded_path(parts.uri.path()), parts.uri.query());
    let body = to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::BadRequestBody(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "forwarding to backend");

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(end_to_end_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from(e);
            tracing::warn!(method = %parts.method, %url, error = %err, "backend request failed");
            err
        })?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %url, %status, "backend returned server error");
    }

    let mut response = Response::builder()
        .status(status)
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::BadResponse(e.to_string()))?;
    *response.headers_mut() = headers;
    Ok(response)
}
