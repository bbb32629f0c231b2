//! Common error types used across the workspace.
//!
//! Each layer produces a typed error and converts into [`HomeboardError`]
//! via `#[from]`, so callers match on a single enum at the boundary.

use thiserror::Error;

/// Top-level error for homeboard operations.
#[derive(Debug, Error)]
pub enum HomeboardError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("snapshot source error")]
    Source(#[from] SourceError),
}

/// Caller-supplied input violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("an area id is required to generate an area view")]
    MissingArea,

    #[error("name must not be empty")]
    EmptyName,
}

/// A referenced record does not exist in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} `{id}` not found")]
pub struct NotFoundError {
    /// Record kind, e.g. `"Area"`.
    pub kind: &'static str,
    /// Identifier that failed to resolve.
    pub id: String,
}

/// The snapshot source failed to produce a snapshot.
#[derive(Debug, Error)]
#[error("snapshot source failure: {message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    /// Wrap an adapter-side failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
