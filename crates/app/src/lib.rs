//! Gatekeeper application composition root
//!
//! Builds the gate from configuration and mounts it in front of the API routes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use gatekeeper_auth::{
    AuthenticationGate, CredentialSource, Enforcement, JwtConfig, JwtVerifier, RequestContext,
};
use gatekeeper_common::{Config, Error};
use serde_json::{json, Value};

/// State shared by the API handlers
#[derive(Clone)]
pub struct AppState {
    /// Where the gate publishes claims
    pub context_key: Arc<str>,
}

/// Build the authentication gate described by `config`.
///
/// Misconfiguration fails here, at startup, never per request.
pub fn build_gate(config: &Config) -> Result<AuthenticationGate, Error> {
    let source: CredentialSource = config
        .auth_source
        .parse()
        .map_err(|e: gatekeeper_auth::UnknownCredentialSource| {
            Error::invalid("AUTH_SOURCE", &config.auth_source, e.to_string())
        })?;

    let verifier = JwtVerifier::new(&JwtConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
        leeway_seconds: config.jwt_leeway_seconds,
    });

    let gate = AuthenticationGate::builder(Arc::new(verifier))
        .source(source)
        .context_key(config.auth_context_key.clone())
        .cookie_name(config.auth_cookie_name.clone())
        .abort_on_unauthenticated(config.auth_abort_on_unauthenticated)
        .build();

    tracing::info!(
        source = %source,
        context_key = %gate.config().context_key,
        abort = gate.config().abort_on_unauthenticated,
        "Authentication gate configured"
    );

    Ok(gate)
}

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let gate = build_gate(config)?;

    let state = AppState {
        context_key: Arc::from(gate.config().context_key.as_str()),
    };

    // `/me` follows the configured policy; `/greeting` always lets callers through
    let strict = gate.protect(Router::new().route("/me", get(me)), Enforcement::UseDefault);
    let lenient = gate.protect(
        Router::new().route("/greeting", get(greeting)),
        Enforcement::ForceContinue,
    );

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/",
            get(|| async { "Gatekeeper v0.0.1-SNAPSHOT" }),
        )
        .nest("/v1", strict.merge(lenient))
        .with_state(state);

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Echo the caller's claims
async fn me(State(state): State<AppState>, ctx: RequestContext) -> Response {
    // The gate may be configured not to abort, so claims are not guaranteed here
    match ctx.claims(&state.context_key) {
        Some(claims) => Json(Value::Object(claims.clone())).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response(),
    }
}

async fn greeting(State(state): State<AppState>, ctx: RequestContext) -> Json<Value> {
    let subject = ctx
        .claims(&state.context_key)
        .and_then(|claims| claims.get("sub"))
        .and_then(Value::as_str);

    Json(json!({
        "message": format!("Hello, {}!", subject.unwrap_or("anonymous")),
        "authenticated": subject.is_some(),
    }))
}
