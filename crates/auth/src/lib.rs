//! Authentication gate for Gatekeeper
//!
//! Reads a token from a cookie, the `Authorization` header, or either,
//! validates it through a [`TokenVerifier`], and publishes the decoded claims
//! into the request's [`RequestContext`] for downstream handlers. Failures
//! either reject with a 401 or let the request through, per configuration.

mod claims;
mod config;
mod context;
mod credential;
mod error;
mod extractors;
mod gate;
mod jwt;
mod middleware;
mod types;
mod verifier;

pub use claims::Claims;
pub use config::{GateConfig, JwtConfig, DEFAULT_CONTEXT_KEY, DEFAULT_COOKIE_NAME};
pub use context::RequestContext;
pub use error::{AuthFailure, Rejection};
pub use gate::{AuthenticationGate, Effect, GateBuilder, Outcome};
pub use jwt::JwtVerifier;
pub use middleware::apply;
pub use types::{CredentialSource, Enforcement, UnknownCredentialSource};
pub use verifier::{TokenVerifier, VerifyError};
