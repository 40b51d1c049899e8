//! Log In Use Case
//!
//! Authenticates an email/password pair and issues a bearer token.
//!
//! Unknown email, malformed email and wrong password all collapse into
//! [`AuthError::InvalidCredentials`]: the caller must not be able to
//! enumerate accounts from response differences.

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;
use platform::token::TokenIssuer;

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Bearer token for the authenticated user
    pub token: String,
}

/// Log in use case
pub struct LogInUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    tokens: Arc<TokenIssuer>,
}

impl<S> LogInUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verification is as CPU-bound as hashing; keep it off the runtime
        let password = ClearTextPassword::new(input.password);
        let stored_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || stored_hash.verify(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LogInOutput { token })
    }
}
