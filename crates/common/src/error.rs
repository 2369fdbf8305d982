//! Common error types and handling for Gatekeeper

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Gatekeeper application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Missing configuration: {0} is required")]
    MissingConfig(&'static str),

    #[error("Invalid configuration: {name}={value} ({reason})")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Get the error code used in startup logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::MissingConfig(_) => "MISSING_CONFIG",
            Error::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }

    pub fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
