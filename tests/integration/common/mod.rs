//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - Configuration fixtures
//! - Token minting helpers
//! - A request helper that drives the assembled router in-process

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use gatekeeper_common::{Config, LogFormat};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret

/// Baseline configuration: header source, abort on failure
pub fn test_config() -> Config {
    Config {
        jwt_secret: TEST_SECRET.to_string(),
        jwt_issuer: None,
        jwt_audience: None,
        jwt_leeway_seconds: 0,
        auth_source: "header".to_string(),
        auth_context_key: "user".to_string(),
        auth_cookie_name: "access-token".to_string(),
        auth_abort_on_unauthenticated: true,
        port: 3000,
        log_format: LogFormat::Pretty,
    }
}

/// Mint an HS256 token for `sub` expiring `ttl_seconds` from now (negative = already expired)
pub fn mint_token(sub: &str, ttl_seconds: i64, secret: &str) -> Result<String> {
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": sub,
        "role": "authenticated",
        "iat": now,
        "exp": now + ttl_seconds,
    });

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    Ok(jsonwebtoken::encode(&header, &claims, &encoding_key)?)
}

pub fn valid_token(sub: &str) -> String {
    mint_token(sub, 3600, TEST_SECRET).unwrap()
}

pub fn expired_token(sub: &str) -> String {
    mint_token(sub, -3600, TEST_SECRET).unwrap()
}

/// Response captured as status + parsed JSON (or `Value::Null` for non-JSON bodies)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

/// Send a GET with the given headers through `router`
pub async fn get(router: &Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);

    TestResponse { status, body, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_tokens_have_three_segments() {
        let token = valid_token("alice");
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_mint_with_custom_secret() {
        tokio_test::assert_ok!(mint_token("alice", 60, "another-secret"));
    }
}
