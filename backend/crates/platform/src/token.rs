//! Bearer Token Issuance
//!
//! Stateless signed tokens (HS256) asserting a subject identity.
//! Claims are `{sub, iat, exp}` with a fixed one-hour lifetime; expiry is
//! the only invalidation mechanism (no server-side revocation list).
//!
//! The signing secret is injected by the caller. There is deliberately no
//! default or fallback secret: a process without one must not start.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds (exactly one hour from issuance)
pub const TOKEN_TTL_SECS: i64 = 3600;

// ============================================================================
// Error Types
// ============================================================================

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing operation failed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Token is malformed, has a bad signature, or expired
    #[error("Token is invalid or expired")]
    Invalid,
}

// ============================================================================
// Claims
// ============================================================================

/// Claims embedded in an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds), always `iat + TOKEN_TTL_SECS`
    pub exp: i64,
}

// ============================================================================
// Issuer
// ============================================================================

/// Signs and verifies bearer tokens with a symmetric secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the configured secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for the given subject id
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// Consumed by protected routes, not by the issuance flow itself.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("encoding_key", &"[SECRET]")
            .field("decoding_key", &"[SECRET]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-at-least-some-bytes";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue("user-42").unwrap();
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-42");
    }

    #[test]
    fn test_expiry_is_one_hour_from_issuance() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue("user-42").unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);

        let now = Utc::now().timestamp();
        assert!((claims.iat - now).abs() <= 5);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue("user-42").unwrap();

        let other = TokenIssuer::new(b"a-completely-different-secret");
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let mut token = issuer.issue("user-42").unwrap();
        token.push('x');

        assert!(matches!(issuer.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        assert!(matches!(
            issuer.verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let issuer = TokenIssuer::new(SECRET);
        let debug_output = format!("{:?}", issuer);
        assert!(debug_output.contains("SECRET"));
        assert!(!debug_output.contains("test-secret"));
    }
}
