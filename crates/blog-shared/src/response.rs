//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_id() -> Self {
        Self::new("Invalid ID")
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{entity} not found"))
    }

    pub fn internal_error() -> Self {
        Self::new("Database error")
    }
}

/// Confirmation body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
