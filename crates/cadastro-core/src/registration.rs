//! # Registration Record
//!
//! The validated registration assembled from the individual domain
//! primitives. A value of this type is fully checked: every field passed
//! through its constructor, so the persistence layer never re-validates.

use serde::{Deserialize, Serialize};

use crate::color::CorPreferida;
use crate::cpf::Cpf;
use crate::email::Email;
use crate::error::ValidationError;

/// A complete, validated registration.
///
/// Lifecycle: constructed once from boundary input, submitted once, then
/// either persisted exactly once or rejected as a duplicate. There are no
/// update or delete operations on a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// National tax identification number; the storage primary key.
    pub cpf: Cpf,
    /// Registrant's full name.
    pub nome_completo: String,
    /// Contact email address.
    pub email: Email,
    /// Preferred color from the fixed palette.
    pub cor_preferida: CorPreferida,
    /// Optional free-text note; `None` is stored as SQL NULL.
    pub observacao: Option<String>,
}

impl Registration {
    /// Assemble a registration, validating the full name.
    ///
    /// The typed fields (`cpf`, `email`, `cor_preferida`) were already
    /// validated at their own construction; the name is the one field that
    /// is a plain string and is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyNomeCompleto`] if the name is empty
    /// or whitespace-only.
    pub fn new(
        cpf: Cpf,
        nome_completo: impl Into<String>,
        email: Email,
        cor_preferida: CorPreferida,
        observacao: Option<String>,
    ) -> Result<Self, ValidationError> {
        let nome_completo = nome_completo.into();
        if nome_completo.trim().is_empty() {
            return Err(ValidationError::EmptyNomeCompleto);
        }

        Ok(Self {
            cpf,
            nome_completo,
            email,
            cor_preferida,
            observacao,
        })
    }
}
