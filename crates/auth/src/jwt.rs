//! HS256 JWT verifier

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use crate::claims::Claims;
use crate::config::JwtConfig;
use crate::verifier::{TokenVerifier, VerifyError};

/// [`TokenVerifier`] backed by `jsonwebtoken`.
///
/// - Key material is not printable via Debug.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtVerifier {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);

        if let Some(aud) = &config.audience {
            validation.set_audience(&[aud]);
        } else {
            validation.validate_aud = false;
        }

        if let Some(iss) = &config.issuer {
            validation.set_issuer(&[iss]);
        }

        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn validate(&self, token: &str) -> Result<Claims, VerifyError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => VerifyError::Expired,
                _ => {
                    tracing::debug!(error = %e, "JWT validation failed");
                    VerifyError::Invalid(e.to_string())
                }
            })?;

        Ok(token_data.claims)
    }
}
