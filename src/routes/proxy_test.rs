use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, Uri};
use serde_json::{Value, json};

use super::*;
use crate::config::{BackendTimeouts, PortalConfig};
use crate::routes::api_routes;

// =============================================================================
// backend_url
// =============================================================================

#[test]
fn backend_url_joins_base_and_path() {
    assert_eq!(
        backend_url("http://backend:8000", "lodgement/list/", None),
        "http://backend:8000/api/lodgement/list/"
    );
}

#[test]
fn backend_url_trims_duplicate_slashes() {
    assert_eq!(backend_url("http://backend:8000/", "/faq/", None), "http://backend:8000/api/faq/");
}

#[test]
fn backend_url_keeps_query_string() {
    assert_eq!(
        backend_url("http://backend:8000", "application/", Some("page=2&q=a%20b")),
        "http://backend:8000/api/application/?page=2&q=a%20b"
    );
}

#[test]
fn backend_url_ignores_empty_query() {
    assert_eq!(backend_url("http://b", "x/", Some("")), "http://b/api/x/");
}

#[test]
fn forwarded_path_keeps_percent_escapes() {
    assert_eq!(forwarded_path("/api/lodgement/a%3Fb%2Fc/"), "lodgement/a%3Fb%2Fc/");
    assert_eq!(forwarded_path("/api/faq/"), "faq/");
}

// =============================================================================
// end_to_end_headers
// =============================================================================

#[test]
fn end_to_end_headers_drops_hop_by_hop_and_host() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.insert("host", HeaderValue::from_static("portal.local"));
    headers.insert("content-length", HeaderValue::from_static("12"));
    headers.insert("authorization", HeaderValue::from_static("Token abc"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    let out = end_to_end_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("authorization").unwrap(), "Token abc");
    assert_eq!(out.get("content-type").unwrap(), "application/json");
}

#[test]
fn end_to_end_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));

    let out = end_to_end_headers(&headers);
    assert_eq!(out.get_all("set-cookie").iter().count(), 2);
}

#[test]
fn hop_by_hop_matches_lowercase_names() {
    assert!(is_hop_by_hop(&HeaderName::from_static("upgrade")));
    assert!(!is_hop_by_hop(&HeaderName::from_static("accept")));
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn proxy_error_status_mapping() {
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::BadRequestBody("too big".into()).status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::BadResponse("bad".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn proxy_error_into_response_carries_status() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
}

// =============================================================================
// forward (end to end)
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    if uri.path() == "/api/missing/" {
        return (StatusCode::NOT_FOUND, axum::Json(json!({ "detail": "Not found." }))).into_response();
    }
    let mut response = axum::Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": auth,
        "body": body,
    }))
    .into_response();
    response.headers_mut().insert("x-backend", HeaderValue::from_static("stub"));
    response
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn portal_state(backend_url: String) -> AppState {
    portal_state_with_timeout(backend_url, 5)
}

fn portal_state_with_timeout(backend_url: String, request_secs: u64) -> AppState {
    AppState::new(PortalConfig {
        backend_url,
        port: 0,
        static_dir: PathBuf::from("static"),
        timeouts: BackendTimeouts { request_secs, connect_secs: 2 },
    })
    .unwrap()
}

#[tokio::test]
async fn forward_replays_method_path_query_and_auth() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let portal = spawn(api_routes(portal_state(backend))).await;

    let response = reqwest::Client::new()
        .post(format!("{portal}/api/application/apply/?queue=3"))
        .header("authorization", "Token t-123")
        .body(r#"{"queue":3}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers().get("x-backend").unwrap(), "stub");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/application/apply/");
    assert_eq!(body["query"], "queue=3");
    assert_eq!(body["authorization"], "Token t-123");
    assert_eq!(body["body"], r#"{"queue":3}"#);
}

#[tokio::test]
async fn forward_passes_backend_errors_through() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let portal = spawn(api_routes(portal_state(backend))).await;

    let response = reqwest::get(format!("{portal}/api/missing/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Not found.");
}

#[tokio::test]
async fn forward_returns_bad_gateway_when_backend_is_down() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let portal = spawn(api_routes(portal_state(closed))).await;
    let response = reqwest::get(format!("{portal}/api/faq/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_answers_ok() {
    let portal = spawn(api_routes(portal_state("http://127.0.0.1:9".to_owned()))).await;
    let response = reqwest::get(format!("{portal}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn forward_keeps_encoded_path_segments() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let portal = spawn(api_routes(portal_state(backend))).await;

    let response = reqwest::get(format!("{portal}/api/lodgement/a%3Fb%2Fc/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["path"], "/api/lodgement/a%3Fb%2Fc/");
    assert_eq!(body["query"], Value::Null);
}

#[tokio::test]
async fn forward_returns_gateway_timeout_when_backend_is_slow() {
    let slow = Router::new().fallback(|| async {
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        StatusCode::OK
    });
    let backend = spawn(slow).await;
    let portal = spawn(api_routes(portal_state_with_timeout(backend, 1))).await;

    let response = reqwest::get(format!("{portal}/api/faq/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn forward_rejects_oversized_request_body() {
    let backend = spawn(Router::new().fallback(echo)).await;
    let portal = spawn(api_routes(portal_state(backend))).await;

    let response = reqwest::Client::new()
        .post(format!("{portal}/api/application/1/submit-documents/"))
        .body(vec![b'x'; MAX_FORWARD_BODY_BYTES + 1])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
}
