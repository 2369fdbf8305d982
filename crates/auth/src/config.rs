//! Authentication configuration

use serde_json::{json, Value};

use crate::types::CredentialSource;

pub const DEFAULT_CONTEXT_KEY: &str = "user";
pub const DEFAULT_COOKIE_NAME: &str = "access-token";

/// Gate settings. Immutable once the gate is built.
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    pub source: CredentialSource,
    /// Key the decoded claims are published under
    pub context_key: String,
    pub cookie_name: String,
    pub abort_on_unauthenticated: bool,
    /// 401 body for every failure except expiration
    pub unauthorized_payload: Value,
    /// 401 body when the verifier reports an expired token
    pub expired_payload: Value,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            source: CredentialSource::TokenHeader,
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            abort_on_unauthenticated: true,
            unauthorized_payload: json!({ "error": "Unauthorized" }),
            expired_payload: json!({ "error": "access token expired" }),
        }
    }
}

/// Settings for the bundled HS256 [`JwtVerifier`](crate::JwtVerifier)
#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub leeway_seconds: u64,
}

impl std::fmt::Debug for JwtConfig {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the secret
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}
