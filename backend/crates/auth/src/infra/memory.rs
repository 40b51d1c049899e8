//! In-Memory Repository Implementation
//!
//! Backs the test suite and database-free harnesses. The uniqueness check
//! and the write happen under one write guard, giving the same atomic
//! insert semantics as the PostgreSQL unique index.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// In-memory credential store, keyed by canonical email
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(email.canonical()).cloned())
    }

    async fn insert(&self, user: NewUser) -> AuthResult<User> {
        let mut users = self.users.write().await;

        let key = user.email.canonical().to_string();
        if users.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }

        let now = Utc::now();
        let stored = User {
            id: UserId::new(),
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            phone_number: user.phone_number,
            about: user.about,
            terms_accepted: user.terms_accepted,
            created_at: now,
            updated_at: now,
        };

        users.insert(key, stored.clone());
        Ok(stored)
    }
}
