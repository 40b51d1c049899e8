//! Auth (Credential Issuance) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait, validation engine
//! - `application/` - Use cases and application configuration
//! - `infra/` - PostgreSQL and in-memory store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Signup with declarative, fully aggregated request validation
//! - Login issuing short-lived bearer tokens
//! - Duplicate accounts rejected by an atomic unique-constrained insert
//!
//! ## Security Model
//! - Passwords hashed with salted Argon2id, never stored or logged in clear
//! - Unknown email and wrong password are indistinguishable to the caller
//! - Token signing secret is required configuration with no fallback

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryCredentialStore;
pub use infra::postgres::PgCredentialStore;
pub use presentation::router::{auth_router, auth_router_generic};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCredentialStore as CredentialStoreImpl;
}

pub mod router {
    pub use crate::presentation::router::*;
}
