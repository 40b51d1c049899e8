//! User Entity
//!
//! A user record as the credential store holds it. This subsystem creates
//! users exactly once (signup) and never mutates or deletes them
//! afterwards; profile edits live elsewhere.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{email::Email, person_name::PersonName, user_id::UserId};
use platform::password::HashedPassword;

/// A user record before the store has assigned id and timestamps
///
/// # Invariants
/// - `terms_accepted` is always true: the constructor is only reachable
///   after the signup schema has proven acceptance
/// - the password is present only as a hash
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: PersonName,
    pub password_hash: HashedPassword,
    pub phone_number: Option<String>,
    pub about: Option<String>,
    pub terms_accepted: bool,
}

impl NewUser {
    /// Create a record for insertion
    pub fn new(
        email: Email,
        name: PersonName,
        password_hash: HashedPassword,
        phone_number: Option<String>,
        about: Option<String>,
    ) -> Self {
        Self {
            email,
            name,
            password_hash,
            phone_number,
            about,
            terms_accepted: true,
        }
    }
}

/// Persisted user
///
/// `id`, `created_at` and `updated_at` are store-assigned.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: PersonName,
    pub password_hash: HashedPassword,
    pub phone_number: Option<String>,
    pub about: Option<String>,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_new_user_always_accepts_terms() {
        let hash = ClearTextPassword::new("Password123".to_string())
            .hash()
            .unwrap();
        let user = NewUser::new(
            Email::new("john@example.com").unwrap(),
            PersonName::from_full("John Doe"),
            hash,
            None,
            None,
        );
        assert!(user.terms_accepted);
    }

    #[test]
    fn test_debug_does_not_leak_hash() {
        let hash = ClearTextPassword::new("Password123".to_string())
            .hash()
            .unwrap();
        let phc = hash.as_phc_string().to_string();
        let user = NewUser::new(
            Email::new("john@example.com").unwrap(),
            PersonName::from_full("John Doe"),
            hash,
            None,
            None,
        );
        let debug_output = format!("{:?}", user);
        assert!(!debug_output.contains(&phc));
    }
}
