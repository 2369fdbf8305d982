//! Credential extraction from request headers

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};
use axum_extra::extract::cookie::Cookie;

use crate::types::CredentialSource;

/// Result of looking for a token in one or more locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Candidate {
    Token(String),
    Missing,
    /// `Authorization` present but not in `<scheme> <token>` shape
    Malformed,
}

impl Candidate {
    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Candidate::Token(v),
            _ => Candidate::Missing,
        }
    }
}

/// Look up the candidate token according to `source`.
pub(crate) fn extract_candidate(
    headers: &HeaderMap,
    source: CredentialSource,
    cookie_name: &str,
) -> Candidate {
    match source {
        CredentialSource::TokenHeader => extract_header_token(headers),
        CredentialSource::Cookie => extract_cookie_token(headers, cookie_name),
        // A present cookie wins outright; validity is not considered here
        CredentialSource::Either => match extract_cookie_token(headers, cookie_name) {
            Candidate::Token(token) => Candidate::Token(token),
            _ => extract_header_token(headers),
        },
    }
}

/// `Authorization: <scheme> <token>`.
///
/// The scheme itself is not checked; only the two-segment shape with a
/// non-empty token after exactly one space. A value that is not visible
/// ASCII is treated as malformed and never reaches the verifier.
pub(crate) fn extract_header_token(headers: &HeaderMap) -> Candidate {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Candidate::Missing;
    };

    let Ok(raw) = value.to_str() else {
        return Candidate::Malformed;
    };

    if raw.is_empty() {
        return Candidate::Missing;
    }

    let mut segments = raw.split(' ');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(_scheme), Some(token), None) if !token.is_empty() => {
            Candidate::Token(token.to_string())
        }
        _ => Candidate::Malformed,
    }
}

/// First cookie named `cookie_name`, across every `Cookie` header in order.
///
/// A repeated name resolves to its first occurrence, even when that value is empty.
pub(crate) fn extract_cookie_token(headers: &HeaderMap, cookie_name: &str) -> Candidate {
    let value = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse_encoded(raw))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name)
        .map(|cookie| cookie.value().to_string());

    Candidate::from_value(value)
}
