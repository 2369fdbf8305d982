//! Gate integration tests
//!
//! End-to-end checks of the authentication gate: real JWTs, real axum routing.

mod app;
mod common;
mod gate;
