//! Person Name Value Object
//!
//! Display name plus its derived parts. The split rule is fixed:
//! trim, split on runs of whitespace, first token becomes the first name,
//! the remaining tokens joined by single spaces become the last name.
//! The full name stays authoritative; the parts are derived, never edited
//! independently.

use std::fmt;

/// Display name with derived first/last parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// Trimmed display name
    full: String,
    /// First whitespace-separated token
    first: String,
    /// Remaining tokens joined by single spaces
    last: String,
}

impl PersonName {
    /// Derive the parts from a full display name
    ///
    /// Total: a single-token or empty name yields an empty last name.
    /// Validation (two tokens, token lengths) happens in the signup
    /// schema, not here.
    pub fn from_full(input: impl AsRef<str>) -> Self {
        let full = input.as_ref().trim().to_string();
        let mut tokens = full.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let last = tokens.collect::<Vec<_>>().join(" ");
        Self { full, first, last }
    }

    /// Reassemble from stored columns (assumed already derived)
    pub fn from_parts(
        full: impl Into<String>,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            full: full.into(),
            first: first.into(),
            last: last.into(),
        }
    }

    /// Get the full display name
    #[inline]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Get the derived first name
    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Get the derived last name
    #[inline]
    pub fn last(&self) -> &str {
        &self.last
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
