//! # Email Newtype
//!
//! A lightly validated email address. Full RFC 5322 parsing is out of
//! proportion for a registration form; the constructor enforces the shape
//! that catches real transcription mistakes (missing `@`, bare hostname,
//! embedded whitespace) and leaves the rest to the mail system.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A registrant's email address, shape-checked at construction.
///
/// # Validation
///
/// - At most 254 bytes (SMTP path limit)
/// - Exactly one `@` with non-empty parts on both sides
/// - Domain contains an interior dot
/// - No whitespace anywhere
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create an email address from a string, validating shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] if the string does not look
    /// like `local@domain.tld`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();

        if s.len() > 254 || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidEmail(s));
        }

        let Some((local, domain)) = s.split_once('@') else {
            return Err(ValidationError::InvalidEmail(s));
        };

        if local.is_empty() || domain.contains('@') {
            return Err(ValidationError::InvalidEmail(s));
        }

        // The domain needs an interior dot: "a.b" is plausible, ".b", "a."
        // and "localhost" are not deliverable registration addresses.
        let dotted = domain.split('.').count() >= 2
            && domain.split('.').all(|label| !label.is_empty());
        if !dotted {
            return Err(ValidationError::InvalidEmail(s));
        }

        Ok(Self(s))
    }

    /// Access the email address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
