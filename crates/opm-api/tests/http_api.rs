//! # End-to-End HTTP API Test
//!
//! Exercises the assembled application over the Tower service interface:
//! anonymous reads, gated writes, the duplicate-tag rejection, and the
//! degrade-to-anonymous behavior of the identity gate — all against the
//! in-memory store with a stubbed profile provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use opm_api::AppState;
use opm_auth::{AdminList, IdentityGate, Profile, ProfileProvider, ProviderError};
use opm_store::MemoryStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Profile provider stub: a fixed token → login table. Unknown tokens
/// fail like the real provider does on a bad credential.
struct TokenTable(HashMap<&'static str, &'static str>);

#[async_trait]
impl ProfileProvider for TokenTable {
    async fn fetch_profile(&self, token: &str) -> Result<Profile, ProviderError> {
        match self.0.get(token) {
            Some(login) => Ok(Profile {
                login: login.to_string(),
            }),
            None => Err(ProviderError::Status(401)),
        }
    }
}

/// Build the full application: in-memory store, stubbed provider with
/// two known tokens, and "Odin" on the admin allow-list.
fn test_app() -> axum::Router {
    let store = Arc::new(MemoryStore::new());
    let provider = Arc::new(TokenTable(HashMap::from([
        ("noah-token", "NoahR02"),
        ("odin-token", "Odin"),
    ])));
    let gate = IdentityGate::new(provider, Arc::new(AdminList::new(["Odin"])));
    opm_api::app(AppState::new(store, gate))
}

/// Parse a response body as JSON.
async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a GET request.
fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a POST request with a JSON body and optional bearer token.
fn post(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn ecs_body() -> serde_json::Value {
    serde_json::json!({
        "name": "ecs",
        "license": "Unlicense",
        "kind": "library",
        "dev_status": "beta",
        "tags": ["ecs", "engine"]
    })
}

fn version_body(tag: &str) -> serde_json::Value {
    let hash = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    serde_json::json!({ "tag_name": tag, "content_hash": hash })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_is_unauthenticated() {
    let app = test_app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_anonymous_create_is_401_and_store_unchanged() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post("/v1/packages", None, ecs_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(get("/v1/packages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_token_degrades_to_anonymous() {
    let app = test_app();
    let response = app
        .oneshot(post("/v1/packages", Some("bogus"), ecs_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_publish_flow() {
    let app = test_app();

    // Submit a package as NoahR02.
    let response = app
        .clone()
        .oneshot(post("/v1/packages", Some("noah-token"), ecs_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let package = body_json(response).await;
    assert_eq!(package["id"], 1);
    assert_eq!(package["name"], "ecs");
    assert_eq!(package["author"], "NoahR02");

    // Publish v1.0.
    let response = app
        .clone()
        .oneshot(post(
            "/v1/packages/1/versions",
            Some("noah-token"),
            version_body("v1.0"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let version = body_json(response).await;
    assert_eq!(version["id"], 1);
    assert_eq!(version["package_id"], 1);
    assert_eq!(version["tag_name"], "v1.0");

    // Publishing the same tag again is a validation failure with the
    // violation spelled out.
    let response = app
        .clone()
        .oneshot(post(
            "/v1/packages/1/versions",
            Some("noah-token"),
            version_body("v1.0"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"]["violations"].is_array());

    // Detail view assembles the version list.
    let response = app.oneshot(get("/v1/packages/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    assert_eq!(detail["package"]["name"], "ecs");
    assert_eq!(detail["versions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stranger_cannot_publish_but_admin_can() {
    let app = test_app();

    app.clone()
        .oneshot(post("/v1/packages", Some("noah-token"), ecs_body()))
        .await
        .unwrap();

    // Odin never touched this package but is on the admin list.
    let response = app
        .oneshot(post(
            "/v1/packages/1/versions",
            Some("odin-token"),
            version_body("v1.0"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_search_and_detail_missing_package() {
    let app = test_app();

    app.clone()
        .oneshot(post("/v1/packages", Some("noah-token"), ecs_body()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/v1/search?q=engine"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["name"], "ecs");

    let response = app.oneshot(get("/v1/packages/404")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_endpoint_reflects_gate_state() {
    let app = test_app();

    let response = app.clone().oneshot(get("/v1/user")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["is_logged_in"], false);
    assert_eq!(body["user"], serde_json::Value::Null);

    let request = Request::builder()
        .uri("/v1/user")
        .header("authorization", "Bearer odin-token")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["is_logged_in"], true);
    assert_eq!(body["is_admin"], true);
    assert_eq!(body["user"]["login"], "Odin");
}
