//! Authentication failures and the rejection response

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Why a request did not authenticate.
///
/// Request-scoped only; never surfaced as a Rust error to the caller of
/// [`AuthenticationGate::evaluate`](crate::AuthenticationGate::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No credential in the configured location(s)
    NoCredential,
    /// `Authorization` present but not `<scheme> <token>`; enforced like `NoCredential`
    MalformedSource,
    /// Verifier rejected the token for any reason other than expiry
    ValidationFailed,
    /// Verifier reported the token as expired
    Expired,
}

impl AuthFailure {
    /// Stable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AuthFailure::NoCredential => "NO_CREDENTIAL",
            AuthFailure::MalformedSource => "MALFORMED_SOURCE",
            AuthFailure::ValidationFailed => "VALIDATION_FAILED",
            AuthFailure::Expired => "TOKEN_EXPIRED",
        }
    }
}

/// A 401 carrying the configured payload
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: StatusCode,
    pub body: Value,
}

impl Rejection {
    pub fn unauthorized(body: Value) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
