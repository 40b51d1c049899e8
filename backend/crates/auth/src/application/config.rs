//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use platform::token::TokenIssuer;

/// Auth application configuration
///
/// There is intentionally no `Default` implementation: the token signing
/// secret is required startup configuration with no embedded fallback.
/// A process that cannot supply one must fail before serving traffic.
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric secret for token signing
    token_secret: String,
}

impl AuthConfig {
    /// Create config from the required signing secret
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
        }
    }

    /// Build the token issuer for this configuration
    pub fn token_issuer(&self) -> TokenIssuer {
        TokenIssuer::new(self.token_secret.as_bytes())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[SECRET]")
            .finish()
    }
}
