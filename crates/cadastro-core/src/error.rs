//! # Validation Errors
//!
//! Structured error types for domain primitive validation, built with
//! `thiserror`. Each variant carries the rejected input and the expected
//! format so that callers can surface actionable messages without guesswork.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
///
/// Each field of a registration enforces its format constraints at
/// construction time; these are the rejections.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// CPF does not conform to the Receita Federal format: 11 digits with
    /// two valid check digits.
    #[error("CPF inválido: \"{0}\" (expected 11 digits with valid check digits, optionally as XXX.XXX.XXX-XX)")]
    InvalidCpf(String),

    /// Email does not have the `local@domain` shape.
    #[error("e-mail inválido: \"{0}\" (expected local@domain with a dotted domain)")]
    InvalidEmail(String),

    /// Color is not one of the seven accepted values.
    #[error("cor preferida inválida: \"{0}\" (expected one of: vermelho, laranja, amarelo, verde, azul, anil, violeta)")]
    InvalidCor(String),

    /// Full name is empty or whitespace-only.
    #[error("nome completo must be non-empty")]
    EmptyNomeCompleto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cpf_display_carries_input() {
        let err = ValidationError::InvalidCpf("123".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("123"));
        assert!(msg.contains("11 digits"));
    }

    #[test]
    fn invalid_email_display_carries_input() {
        let err = ValidationError::InvalidEmail("not-an-email".to_string());
        assert!(format!("{err}").contains("not-an-email"));
    }

    #[test]
    fn invalid_cor_display_lists_palette() {
        let err = ValidationError::InvalidCor("magenta".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("magenta"));
        assert!(msg.contains("violeta"));
    }

    #[test]
    fn empty_nome_display() {
        let err = ValidationError::EmptyNomeCompleto;
        assert!(format!("{err}").contains("non-empty"));
    }

    #[test]
    fn all_error_variants_are_debug() {
        let e1 = ValidationError::InvalidCpf("x".to_string());
        let e2 = ValidationError::InvalidEmail("y".to_string());
        let e3 = ValidationError::InvalidCor("z".to_string());
        let e4 = ValidationError::EmptyNomeCompleto;
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
        assert!(!format!("{e3:?}").is_empty());
        assert!(!format!("{e4:?}").is_empty());
    }
}
