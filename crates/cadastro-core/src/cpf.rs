//! # CPF Newtype
//!
//! The CPF (Cadastro de Pessoas Físicas) is the Brazilian 11-digit national
//! tax identification number. The last two digits are check digits computed
//! from the preceding ones via fixed positional weights, which catches most
//! transcription errors at the boundary.
//!
//! The canonical storage format is 11 digits without separators. The
//! constructor accepts both:
//! - `"11144477735"` (digits only)
//! - `"111.444.777-35"` (formatted with the standard input mask)
//!
//! Any non-digit character is stripped before validation, so partial or
//! unusual masking is also tolerated.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated CPF in canonical 11-digit form.
///
/// # Validation
///
/// - Must contain exactly 11 digits after stripping non-digit characters
/// - Must not be a repdigit (`"00000000000"`, `"11111111111"`, ...); these
///   satisfy the checksum but are issued to no one
/// - Digit 10 must equal the check digit over digits 1–9
/// - Digit 11 must equal the check digit over digits 1–10
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpf(String);

impl Cpf {
    /// Create a CPF from a string value, validating format and check digits.
    ///
    /// Accepts both `"11144477735"` and `"111.444.777-35"` forms and stores
    /// the canonical digit-only representation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the input does not reduce
    /// to 11 digits, is a repdigit, or fails the check-digit verification.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits: Vec<u8> = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .map(|c| c as u8 - b'0')
            .collect();

        if digits.len() != 11 {
            return Err(ValidationError::InvalidCpf(raw));
        }

        // Repdigits pass the weighted checksum by construction, so they must
        // be rejected before the arithmetic runs.
        if digits.iter().all(|&d| d == digits[0]) {
            return Err(ValidationError::InvalidCpf(raw));
        }

        if digits[9] != Self::check_digit(&digits[..9])
            || digits[10] != Self::check_digit(&digits[..10])
        {
            return Err(ValidationError::InvalidCpf(raw));
        }

        Ok(Self(digits.iter().map(|&d| char::from(b'0' + d)).collect()))
    }

    /// Check whether a string is a well-formed CPF.
    ///
    /// Convenience predicate over [`Cpf::new`]; total and side-effect free.
    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    /// Compute the check digit for a digit slice.
    ///
    /// The digit at position `i` is weighted by `len + 1 - i` (weights
    /// descend to 2), the weighted sum is reduced mod 11, and the result is
    /// 0 when the remainder is below 2, otherwise `11 - remainder`.
    fn check_digit(digits: &[u8]) -> u8 {
        let len = digits.len() as u32;
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| u32::from(d) * (len + 1 - i as u32))
            .sum();
        let remainder = sum % 11;
        if remainder < 2 {
            0
        } else {
            (11 - remainder) as u8
        }
    }

    /// Access the CPF in canonical 11-digit form (no separators).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the CPF in the standard display mask: XXX.XXX.XXX-XX.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_reference_number() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert_eq!(cpf.as_str(), "11144477735");
    }

    #[test]
    fn corrupted_check_digit_rejected() {
        assert!(Cpf::new("11144477736").is_err());
    }

    #[test]
    fn masked_input_canonicalized() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        assert_eq!(cpf.as_str(), "11144477735"); // stored without separators
        assert_eq!(cpf.formatted(), "111.444.777-35");
    }

    #[test]
    fn separator_invariance() {
        assert_eq!(
            Cpf::is_valid("111.444.777-35"),
            Cpf::is_valid("11144477735")
        );
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(Cpf::new("").is_err());
        assert!(Cpf::new("1114447773").is_err()); // 10 digits
        assert!(Cpf::new("111444777355").is_err()); // 12 digits
        assert!(Cpf::new("abc").is_err()); // no digits at all
    }

    #[test]
    fn repdigits_rejected() {
        // Every repdigit satisfies the checksum arithmetic; all must still fail.
        for d in 0..=9u8 {
            let s: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(Cpf::new(s.as_str()).is_err(), "repdigit {s} must be invalid");
        }
    }

    #[test]
    fn first_check_digit_corruption_rejected() {
        assert!(Cpf::new("11144477745").is_err());
    }

    #[test]
    fn display_uses_mask() {
        let cpf = Cpf::new("11144477735").unwrap();
        assert_eq!(format!("{cpf}"), "111.444.777-35");
    }

    #[test]
    fn serde_round_trip() {
        let cpf = Cpf::new("111.444.777-35").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"11144477735\"");
        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cpf);
    }
}
