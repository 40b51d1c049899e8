//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{email::Email, person_name::PersonName, user_id::UserId};
use crate::error::{AuthError, AuthResult};
use platform::password::HashedPassword;

/// PostgreSQL-backed credential store
///
/// Uniqueness lives in the database: the unique index on
/// `email_canonical` makes the insert atomic, so of two racing signups
/// exactly one row is written and the loser sees a 23505.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                name,
                first_name,
                last_name,
                password_hash,
                phone_number,
                about,
                terms_accepted,
                created_at,
                updated_at
            FROM users
            WHERE email_canonical = $1
            "#,
        )
        .bind(email.canonical())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, user: NewUser) -> AuthResult<User> {
        let result = sqlx::query_as::<_, InsertedRow>(
            r#"
            INSERT INTO users (
                email,
                email_canonical,
                name,
                first_name,
                last_name,
                password_hash,
                phone_number,
                about,
                terms_accepted
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING user_id, created_at, updated_at
            "#,
        )
        .bind(user.email.original())
        .bind(user.email.canonical())
        .bind(user.name.full())
        .bind(user.name.first())
        .bind(user.name.last())
        .bind(user.password_hash.as_phc_string())
        .bind(user.phone_number.as_deref())
        .bind(user.about.as_deref())
        .bind(user.terms_accepted)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(User {
                id: UserId::from_uuid(row.user_id),
                email: user.email,
                name: user.name,
                password_hash: user.password_hash,
                phone_number: user.phone_number,
                about: user.about,
                terms_accepted: user.terms_accepted,
                created_at: row.created_at,
                updated_at: row.updated_at,
            }),
            Err(e) if is_unique_violation(&e) => Err(AuthError::EmailTaken),
            Err(e) => Err(e.into()),
        }
    }
}

/// SQLSTATE 23505: unique_violation
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    name: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    phone_number: Option<String>,
    about: Option<String>,
    terms_accepted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("stored hash is malformed: {e}")))?;

        Ok(User {
            id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            name: PersonName::from_parts(self.name, self.first_name, self.last_name),
            password_hash,
            phone_number: self.phone_number,
            about: self.about,
            terms_accepted: self.terms_accepted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct InsertedRow {
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}
