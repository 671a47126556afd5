//! Error types for astra-core
//!
//! The relay itself has no error type: it performs no validation and raises
//! no domain errors. Only the store seams are fallible.

use thiserror::Error;

/// Errors from user registry implementations
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// An account with this email already exists
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// Backend storage failed
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from upload URL signing
#[derive(Debug, Error)]
pub enum SignError {
    /// The signing key was rejected by the MAC implementation
    #[error("invalid signing key: {0}")]
    Key(String),
}
