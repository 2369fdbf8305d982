//! Token verification seam
//!
//! The gate never touches key material. Everything cryptographic happens
//! behind [`TokenVerifier`].

use crate::claims::Claims;

/// Why a token was rejected by the verifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The token's expiration has passed
    #[error("access token expired")]
    Expired,

    /// Bad signature, malformed structure, unsupported algorithm, ...
    #[error("invalid token: {0}")]
    Invalid(String),
}

impl VerifyError {
    pub fn is_expired(&self) -> bool {
        matches!(self, VerifyError::Expired)
    }
}

/// Validates a raw token string and decodes its claims.
///
/// Implementations are called once per request, synchronously, from every
/// in-flight request at the same time.
pub trait TokenVerifier: Send + Sync {
    fn validate(&self, token: &str) -> Result<Claims, VerifyError>;
}
