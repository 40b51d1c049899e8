//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store trait
///
/// The store is the only shared resource between requests. Uniqueness of
/// the canonical email is enforced at the write: there is no separate
/// existence check, so two racing signups cannot both pass a lookup before
/// either writes.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Find a user by email (canonical-form comparison)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Insert a new user under the unique-email constraint
    ///
    /// Returns the stored record with store-assigned id and timestamps.
    /// A duplicate canonical email surfaces as [`AuthError::EmailTaken`],
    /// exactly as if the duplicate had been detected before hashing.
    ///
    /// [`AuthError::EmailTaken`]: crate::error::AuthError::EmailTaken
    async fn insert(&self, user: NewUser) -> AuthResult<User>;
}
