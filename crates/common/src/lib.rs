//! Shared configuration and error handling for Gatekeeper
//!
//! This crate provides common functionality used across the Gatekeeper workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling

pub mod config;
pub mod error;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
