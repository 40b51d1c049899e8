//! Auth Error Types
//!
//! The taxonomy mirrors the API contract: validation failures and duplicate
//! accounts are 400s, bad credentials are a uniform 401, and everything
//! internal collapses into an opaque 500 whose body depends on the
//! operation ("Error creating user" / "Error logging in"). Internal causes
//! are logged, never surfaced.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::validation::FieldError;
use platform::password::PasswordHashError;
use platform::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Aggregated request validation failures, in schema order
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Signup against an email that already has an account
    #[error("User with this email already exists")]
    EmailTaken,

    /// Unknown email or wrong password
    ///
    /// The two cases are deliberately indistinguishable: same variant,
    /// same status, same body. Do not split them.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Token signing failed
    #[error("Token signing failed: {0}")]
    Token(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::EmailTaken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Database(_)
            | AuthError::Hashing(_)
            | AuthError::Token(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(msg) => {
                tracing::error!(message = %msg, "Password hashing error");
            }
            AuthError::Token(msg) => {
                tracing::error!(message = %msg, "Token signing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::EmailTaken => {
                tracing::debug!("Signup with already registered email");
            }
            AuthError::Validation(details) => {
                tracing::debug!(violations = details.len(), "Request validation failed");
            }
        }
    }

    /// Render with the operation-specific opaque 500 message
    fn into_response_with(self, internal_message: &'static str) -> Response {
        self.log();
        let status = self.status_code();
        let body = match &self {
            AuthError::Validation(details) => serde_json::json!({
                "error": "Validation failed",
                "details": details,
            }),
            AuthError::EmailTaken => serde_json::json!({
                "error": "User with this email already exists",
            }),
            AuthError::InvalidCredentials => serde_json::json!({
                "error": "Invalid credentials",
            }),
            _ => serde_json::json!({ "error": internal_message }),
        };
        (status, Json(body)).into_response()
    }

    /// Render for the signup operation
    pub fn into_signup_response(self) -> Response {
        self.into_response_with("Error creating user")
    }

    /// Render for the login operation
    pub fn into_login_response(self) -> Response {
        self.into_response_with("Error logging in")
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Hashing(err.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        AuthError::Token(err.to_string())
    }
}
