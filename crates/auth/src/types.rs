//! Gate policy types
//!
//! Where a credential is read from, and how a single evaluation enforces
//! the outcome.

use std::fmt;
use std::str::FromStr;

/// Where the gate looks for the access token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialSource {
    /// `Authorization: <scheme> <token>`
    #[default]
    TokenHeader,
    /// The configured cookie
    Cookie,
    /// Cookie first; the header is only consulted when no cookie value is present.
    ///
    /// A present cookie is never second-guessed: if it fails validation the
    /// header is not tried.
    Either,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::TokenHeader => write!(f, "header"),
            CredentialSource::Cookie => write!(f, "cookie"),
            CredentialSource::Either => write!(f, "either"),
        }
    }
}

/// Unrecognised credential source name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown credential source: {0} (expected header, cookie or either)")]
pub struct UnknownCredentialSource(pub String);

impl FromStr for CredentialSource {
    type Err = UnknownCredentialSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" | "token" => Ok(CredentialSource::TokenHeader),
            "cookie" => Ok(CredentialSource::Cookie),
            "either" | "both" => Ok(CredentialSource::Either),
            _ => Err(UnknownCredentialSource(s.to_string())),
        }
    }
}

/// Per-evaluation enforcement override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enforcement {
    /// Follow the gate's configured `abort_on_unauthenticated`
    #[default]
    UseDefault,
    /// Reject unauthenticated requests regardless of configuration
    ForceAbort,
    /// Let unauthenticated requests through regardless of configuration
    ForceContinue,
}

impl Enforcement {
    /// Resolve against the configured default
    pub fn should_abort(self, configured: bool) -> bool {
        match self {
            Enforcement::UseDefault => configured,
            Enforcement::ForceAbort => true,
            Enforcement::ForceContinue => false,
        }
    }
}
