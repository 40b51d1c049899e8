//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{LogInInput, LogInUseCase, SignUpUseCase};
use crate::domain::repository::CredentialStore;
use crate::presentation::dto::{LoginRequest, LoginResponse, SignupResponse, UserView};
use platform::token::TokenIssuer;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<S>(
    State(state): State<AuthAppState<S>>,
    Json(body): Json<Value>,
) -> Response
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.store.clone(), state.tokens.clone());

    match use_case.execute(&body).await {
        Ok(output) => (
            StatusCode::CREATED,
            Json(SignupResponse {
                message: "User registered successfully".to_string(),
                token: output.token,
                user: UserView::from(&output.user),
            }),
        )
            .into_response(),
        Err(err) => err.into_signup_response(),
    }
}

// ============================================================================
// Log In
// ============================================================================

/// POST /login
pub async fn log_in<S>(
    State(state): State<AuthAppState<S>>,
    Json(req): Json<LoginRequest>,
) -> Response
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.store.clone(), state.tokens.clone());

    let input = LogInInput {
        email: req.email,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(output) => (
            StatusCode::OK,
            Json(LoginResponse {
                message: "Login successful!".to_string(),
                token: output.token,
            }),
        )
            .into_response(),
        Err(err) => err.into_login_response(),
    }
}
