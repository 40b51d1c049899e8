//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialStore;
use crate::infra::postgres::PgCredentialStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the PostgreSQL store
pub fn auth_router(store: PgCredentialStore, config: AuthConfig) -> Router {
    auth_router_generic(store, config)
}

/// Create an auth router for any store implementation
pub fn auth_router_generic<S>(store: S, config: AuthConfig) -> Router
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        store: Arc::new(store),
        tokens: Arc::new(config.token_issuer()),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<S>))
        .route("/login", post(handlers::log_in::<S>))
        .with_state(state)
}
