//! Error handling - maps failures to `{"error": "..."}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use blog_core::RepoError;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to JSON error responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl AppError {
    pub fn invalid_id() -> Self {
        AppError::BadRequest(ErrorResponse::invalid_id().error)
    }

    pub fn post_not_found() -> Self {
        AppError::NotFound(ErrorResponse::not_found("Post").error)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                ErrorResponse::new(detail.as_str())
            }
            AppError::Internal(detail) => {
                // Store details stay in the logs
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match &err {
            RepoError::Connection(msg) => tracing::error!("Database connection error: {}", msg),
            RepoError::Query(msg) => tracing::error!("Database query error: {}", msg),
            RepoError::Decode(msg) => tracing::error!("Database decode error: {}", msg),
        }
        AppError::Internal(err.to_string())
    }
}

/// JSON body extractor config: any decode failure becomes a 400 carrying
/// the decoder's message. A `Content-Type` header is not required.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Path extractor config: an `{id}` segment that does not parse as a post
/// id becomes a 400 `Invalid ID`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected identifier: {}", err);
        AppError::invalid_id().into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
