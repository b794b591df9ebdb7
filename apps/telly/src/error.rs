//! Application error types for telly.
//!
//! Provides a unified error type that implements `IntoResponse` for Axum.
//! Since telly serves HTML, errors render as small HTML snippets rather
//! than JSON bodies.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading/parsing errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Catalog service failure (transport error, bad status, or unparseable body)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Config(e) => {
                // Log full error details but don't expose to client
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error".to_string())
            }
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "The catalog service could not be reached".to_string(),
                )
            }
            AppError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("Not found: {}", resource))
            }
            AppError::BadRequest(msg) => {
                // Bad request messages are safe to expose (client-caused errors)
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Internal(msg) => {
                // Log full error but don't expose internal details
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Html(format!("<div class='telly-error'>{}</div>", message));
        (status, body).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
