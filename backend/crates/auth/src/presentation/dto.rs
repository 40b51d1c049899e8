//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

// The signup request has no DTO on purpose: the raw JSON body goes through
// the validation schema, which is what produces field-tagged errors
// instead of a single deserialization failure.

/// Sign up response (201)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}

/// Public projection of a user
///
/// Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub about: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.full().to_string(),
            email: user.email.original().to_string(),
            first_name: user.name.first().to_string(),
            last_name: user.name.last().to_string(),
            phone_number: user.phone_number.clone(),
            about: user.about.clone(),
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
///
/// Fields default to empty strings: a request missing either one falls
/// into the regular credential check and gets the uniform 401, not a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Log in response (200)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}
