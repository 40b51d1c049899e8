//! Sign Up Use Case
//!
//! Creates a new user account from a raw request body:
//! validate → hash → atomic insert → issue token. Validation always
//! precedes the store write, and the write always precedes token
//! issuance; a failure at any step persists nothing.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::CredentialStore;
use crate::domain::validation::{FieldError, validate_signup};
use crate::domain::value_object::{email::Email, person_name::PersonName};
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;
use platform::token::TokenIssuer;

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    /// Bearer token for the freshly registered user
    pub token: String,
    /// The stored record (the handler projects the public view)
    pub user: User,
}

/// Sign up use case
pub struct SignUpUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    tokens: Arc<TokenIssuer>,
}

impl<S> SignUpUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    pub async fn execute(&self, body: &Value) -> AuthResult<SignUpOutput> {
        // Validate the raw body; every rule violation is reported at once
        let data = validate_signup(body)?;

        let email = Email::new(&data.email).map_err(|_| {
            AuthError::Validation(vec![FieldError::new("email", "Invalid email format")])
        })?;
        let name = PersonName::from_full(&data.name);

        // Argon2 is CPU-bound; hash off the async runtime so one slow
        // hash does not stall unrelated requests
        let password = ClearTextPassword::new(data.password);
        let password_hash = tokio::task::spawn_blocking(move || password.hash())
            .await
            .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))??;

        // Duplicate detection happens inside the unique-constrained
        // insert; a racing signup with the same email loses here and gets
        // the same conflict as a sequential one
        let user = self
            .store
            .insert(NewUser::new(
                email,
                name,
                password_hash,
                data.phone_number,
                data.about,
            ))
            .await?;

        let token = self.tokens.issue(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(SignUpOutput { token, user })
    }
}
