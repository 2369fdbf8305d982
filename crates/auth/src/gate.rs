//! The authentication gate
//!
//! Per request: extract a candidate token from the configured source, hand it
//! to the [`TokenVerifier`] once, then either publish the claims, reject with a
//! 401, or let the request through unauthenticated.

use std::sync::Arc;

use axum::http::{request::Parts, HeaderMap};
use serde_json::Value;

use crate::claims::Claims;
use crate::config::GateConfig;
use crate::context::RequestContext;
use crate::credential::{extract_candidate, Candidate};
use crate::error::{AuthFailure, Rejection};
use crate::types::{CredentialSource, Enforcement};
use crate::verifier::{TokenVerifier, VerifyError};

/// Result of authenticating one request, before enforcement
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Authenticated(Claims),
    NoCredential,
    Invalid(VerifyError),
    Expired,
}

impl Outcome {
    pub fn failure(&self) -> Option<AuthFailure> {
        match self {
            Outcome::Authenticated(_) => None,
            Outcome::NoCredential => Some(AuthFailure::NoCredential),
            Outcome::Invalid(_) => Some(AuthFailure::ValidationFailed),
            Outcome::Expired => Some(AuthFailure::Expired),
        }
    }
}

/// What the surrounding framework should do with the request
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Continue,
    Abort(Rejection),
}

/// Configurable authentication middleware unit.
///
/// Cheap to clone; the configuration is shared and never mutated after
/// [`GateBuilder::build`].
#[derive(Clone)]
pub struct AuthenticationGate {
    verifier: Arc<dyn TokenVerifier>,
    config: Arc<GateConfig>,
}

impl std::fmt::Debug for AuthenticationGate {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationGate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AuthenticationGate {
    /// Header source, context key `user`, abort on failure, default payloads
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self::with_config(verifier, GateConfig::default())
    }

    pub fn with_config(verifier: Arc<dyn TokenVerifier>, config: GateConfig) -> Self {
        Self {
            verifier,
            config: Arc::new(config),
        }
    }

    pub fn builder(verifier: Arc<dyn TokenVerifier>) -> GateBuilder {
        GateBuilder {
            verifier,
            config: GateConfig::default(),
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Extract and validate, without side effects.
    ///
    /// An empty candidate never reaches the verifier.
    pub fn authenticate(&self, headers: &HeaderMap) -> Outcome {
        let candidate = extract_candidate(headers, self.config.source, &self.config.cookie_name);
        let token = match candidate {
            Candidate::Token(token) => token,
            Candidate::Missing => return Outcome::NoCredential,
            Candidate::Malformed => {
                tracing::debug!(
                    reason = AuthFailure::MalformedSource.code(),
                    "Authorization header is not in <scheme> <token> form"
                );
                return Outcome::NoCredential;
            }
        };

        match self.verifier.validate(&token) {
            Ok(claims) => Outcome::Authenticated(claims),
            Err(VerifyError::Expired) => Outcome::Expired,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    source = %self.config.source,
                    "Token validation failed"
                );
                Outcome::Invalid(err)
            }
        }
    }

    /// Authenticate the request and apply the enforcement policy.
    ///
    /// On success the claims are published under `context_key` in the
    /// request's [`RequestContext`]. On failure nothing is published; the
    /// request is either rejected or continues unauthenticated.
    pub fn evaluate(&self, parts: &mut Parts, enforcement: Enforcement) -> Effect {
        match self.authenticate(&parts.headers) {
            Outcome::Authenticated(claims) => {
                self.publish(parts, claims);
                Effect::Continue
            }
            outcome => self.enforce(&outcome, enforcement),
        }
    }

    /// Decide the effect of a failed outcome
    pub fn enforce(&self, outcome: &Outcome, enforcement: Enforcement) -> Effect {
        let Some(failure) = outcome.failure() else {
            return Effect::Continue;
        };

        let abort = enforcement.should_abort(self.config.abort_on_unauthenticated);
        tracing::debug!(
            reason = failure.code(),
            source = %self.config.source,
            abort,
            "Request not authenticated"
        );

        if !abort {
            return Effect::Continue;
        }

        let payload = match failure {
            AuthFailure::Expired => &self.config.expired_payload,
            _ => &self.config.unauthorized_payload,
        };
        Effect::Abort(Rejection::unauthorized(payload.clone()))
    }

    fn publish(&self, parts: &mut Parts, claims: Claims) {
        let value = Value::Object(claims);
        match parts.extensions.get_mut::<RequestContext>() {
            Some(ctx) => {
                ctx.insert(self.config.context_key.clone(), value);
            }
            None => {
                let mut ctx = RequestContext::new();
                ctx.insert(self.config.context_key.clone(), value);
                parts.extensions.insert(ctx);
            }
        }
    }
}

/// Fluent construction over [`GateConfig::default`].
///
/// Each setter overrides exactly one field; a later call to the same setter
/// wins.
pub struct GateBuilder {
    verifier: Arc<dyn TokenVerifier>,
    config: GateConfig,
}

impl GateBuilder {
    pub fn source(mut self, source: CredentialSource) -> Self {
        self.config.source = source;
        self
    }

    pub fn context_key(mut self, key: impl Into<String>) -> Self {
        self.config.context_key = key.into();
        self
    }

    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.config.cookie_name = name.into();
        self
    }

    pub fn abort_on_unauthenticated(mut self, abort: bool) -> Self {
        self.config.abort_on_unauthenticated = abort;
        self
    }

    pub fn unauthorized_payload(mut self, payload: impl Into<Value>) -> Self {
        self.config.unauthorized_payload = payload.into();
        self
    }

    pub fn expired_payload(mut self, payload: impl Into<Value>) -> Self {
        self.config.expired_payload = payload.into();
        self
    }

    pub fn build(self) -> AuthenticationGate {
        AuthenticationGate::with_config(self.verifier, self.config)
    }
}
