//! JWT claims types

/// Decoded token payload.
///
/// Produced entirely by the [`TokenVerifier`](crate::TokenVerifier); the gate
/// republishes it untouched.
pub type Claims = serde_json::Map<String, serde_json::Value>;
