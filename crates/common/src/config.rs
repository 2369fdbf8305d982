//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Error, Result};

/// Log output format for the binaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Token verification (HS256)
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub jwt_leeway_seconds: u64,

    /// Gate settings; `auth_source` is one of `header`, `cookie`, `either`
    pub auth_source: String,
    pub auth_context_key: String,
    pub auth_cookie_name: String,
    pub auth_abort_on_unauthenticated: bool,

    /// Runtime configuration
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_leeway_seconds = match get("JWT_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid("JWT_LEEWAY_SECONDS", &raw, "expected seconds"))?,
            None => 0,
        };

        let auth_abort_on_unauthenticated = match get("AUTH_ABORT_ON_UNAUTHENTICATED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                Error::invalid("AUTH_ABORT_ON_UNAUTHENTICATED", &raw, "expected a boolean")
            })?,
            None => true,
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::invalid("PORT", &raw, "expected a port number"))?,
            None => 3000,
        };

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(Error::invalid("LOG_FORMAT", other, "expected pretty or json"))
            }
        };

        let config = Self {
            jwt_secret: get("JWT_SECRET").ok_or(Error::MissingConfig("JWT_SECRET"))?,
            jwt_issuer: get("JWT_ISSUER"),
            jwt_audience: get("JWT_AUDIENCE"),
            jwt_leeway_seconds,

            auth_source: get("AUTH_SOURCE").unwrap_or_else(|| "header".to_string()),
            auth_context_key: get("AUTH_CONTEXT_KEY").unwrap_or_else(|| "user".to_string()),
            auth_cookie_name: get("AUTH_COOKIE_NAME")
                .unwrap_or_else(|| "access-token".to_string()),
            auth_abort_on_unauthenticated,

            port,
            log_format,
        };

        tracing::debug!(
            auth_source = %config.auth_source,
            auth_context_key = %config.auth_context_key,
            abort = config.auth_abort_on_unauthenticated,
            "Configuration resolved"
        );

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
