//! Axum extractors for authentication
//!
//! Generic over any state `S`; the gate publishes into request extensions so
//! no state access is needed.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::context::RequestContext;

/// Whatever the gate published for this request.
///
/// Empty when the gate let the request through unauthenticated (or did not
/// run at all), so handlers must check for claims before trusting a caller.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}
