//! Errors surfaced by [`crate::Repository`] operations.
//!
//! None of these are fatal. The UI shows the `Display` text to the user and
//! carries on; nothing is retried.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VibeError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Please fill out all fields ({0})")]
    ValidationFailed(String),
}

pub type VibeResult<T> = Result<T, VibeError>;
