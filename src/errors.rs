//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into the HTML error pages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::config::{INVALID_CREDENTIALS_MESSAGE, LOGIN_PATH};
use crate::utils::templates;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    /// Duplicate registration. Carries the user-visible message.
    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Session token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::Jwt(_) => StatusCode::SEE_OTHER,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Database(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show on a form (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A database error occurred".to_string(),
            AppError::Jwt(_) => "Your session has expired".to_string(),
            AppError::Config(_) | AppError::Io(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Log the underlying cause server-side. Never includes request data.
    pub fn log(&self) {
        match self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Jwt(e) => tracing::debug!("Session token rejected: {:?}", e),
            AppError::Io(e) => tracing::error!("I/O error: {}", e),
            AppError::Config(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg)
            }
            _ => tracing::debug!("Request rejected: {}", self),
        }
    }

    /// Whether the error should be shown to the user on the form it came from.
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials | AppError::Conflict(_) | AppError::Validation(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized | AppError::Jwt(_) => {
                Redirect::to(LOGIN_PATH).into_response()
            }
            other => {
                let status = other.status();
                other.log();
                if status.is_server_error() {
                    (status, Html(templates::internal_error_page())).into_response()
                } else {
                    let message = templates::escape_html(&other.user_message());
                    (status, Html(templates::message_page(&message))).into_response()
                }
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers().get("location").unwrap();
        assert_eq!(location.to_str().unwrap(), LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let error = AppError::internal("connection string leaked");
        assert_eq!(error.user_message(), "An internal error occurred");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Oops! Something went wrong"));
        assert!(!body.contains("connection string"));
    }

    #[test]
    fn test_form_errors() {
        assert!(AppError::InvalidCredentials.is_form_error());
        assert!(AppError::conflict("Username already exists").is_form_error());
        assert!(!AppError::internal("boom").is_form_error());
    }

    #[test]
    fn test_conflict_message_is_verbatim() {
        let error = AppError::conflict("Email already registered");
        assert_eq!(error.user_message(), "Email already registered");
    }
}
