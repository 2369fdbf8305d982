//! Composition root integration tests
//!
//! Exercises the routes assembled by `gatekeeper_app::create_app`.

use axum::http::StatusCode;
use gatekeeper_app::create_app;
use gatekeeper_common::Config;
use serde_json::json;

use crate::common::{expired_token, get, test_config, valid_token};

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[tokio::test]
async fn test_health_is_public() {
    let app = create_app(&test_config()).unwrap();

    let res = get(&app, "/health", &[]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text, "OK");
}

#[tokio::test]
async fn test_me_returns_exact_claims() {
    let app = create_app(&test_config()).unwrap();

    let res = get(&app, "/v1/me", &[("authorization", &bearer(&valid_token("alice")))]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["sub"], "alice");
    assert_eq!(res.body["role"], "authenticated");
    assert!(res.body.get("exp").is_some());
}

#[tokio::test]
async fn test_me_rejects_missing_token() {
    let app = create_app(&test_config()).unwrap();

    let res = get(&app, "/v1/me", &[]).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_me_reports_expired_token() {
    let app = create_app(&test_config()).unwrap();

    let res = get(&app, "/v1/me", &[("authorization", &bearer(&expired_token("alice")))]).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, json!({ "error": "access token expired" }));
}

#[tokio::test]
async fn test_greeting_is_open_but_personalised() {
    let app = create_app(&test_config()).unwrap();

    let res = get(&app, "/v1/greeting", &[]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Hello, anonymous!");
    assert_eq!(res.body["authenticated"], false);

    let res = get(&app, "/v1/greeting", &[("authorization", "Bearer garbage")]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["authenticated"], false);

    let res = get(&app, "/v1/greeting", &[("authorization", &bearer(&valid_token("bob")))]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "Hello, bob!");
    assert_eq!(res.body["authenticated"], true);
}

#[tokio::test]
async fn test_cookie_configuration_with_custom_key() {
    let config = Config {
        auth_source: "cookie".to_string(),
        auth_cookie_name: "session".to_string(),
        auth_context_key: "claims".to_string(),
        ..test_config()
    };
    let app = create_app(&config).unwrap();

    let cookie = format!("session={}", valid_token("carol"));
    let res = get(&app, "/v1/me", &[("cookie", &cookie)]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["sub"], "carol");

    // Header is ignored for cookie-only configuration
    let res = get(&app, "/v1/me", &[("authorization", &bearer(&valid_token("carol")))]).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_no_abort_configuration_reaches_handler_without_claims() {
    let config = Config {
        auth_abort_on_unauthenticated: false,
        ..test_config()
    };
    let app = create_app(&config).unwrap();

    // Gate continues; the handler itself refuses because nothing was published
    let res = get(&app, "/v1/me", &[]).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, json!({ "error": "Unauthorized" }));
}

#[test]
fn test_unknown_source_fails_at_startup() {
    let config = Config {
        auth_source: "query".to_string(),
        ..test_config()
    };
    assert!(create_app(&config).is_err());
}
