//! Domain-level error types.

use thiserror::Error;

/// Identifier parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("expected 24 hex characters, got {0}")]
    Length(usize),

    #[error("invalid hex character {0:?}")]
    InvalidChar(char),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Stored document is malformed: {0}")]
    Decode(String),
}
