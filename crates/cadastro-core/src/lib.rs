#![deny(missing_docs)]

//! # cadastro-core — Foundational Types for the Cadastro Service
//!
//! This crate defines the domain types the API crate depends on. It has no
//! internal crate dependencies (only `serde` and `thiserror` from the
//! external ecosystem) and performs no I/O.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`Cpf`] is a distinct
//!    type, not a string that happens to hold 11 digits. You cannot pass an
//!    unvalidated identifier where a [`Cpf`] is expected.
//!
//! 2. **Validation at construction.** [`Cpf::new`] and [`Email::new`] reject
//!    malformed input before a value exists. Once constructed, a value is
//!    canonical (digit-only CPF, as-given email) for its entire lifetime.
//!
//! 3. **Single [`CorPreferida`] enum.** One definition, 7 variants, exhaustive
//!    `match` everywhere. Unknown color strings are an explicit
//!    [`ValidationError`], never a silent fallback.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod color;
pub mod cpf;
pub mod email;
pub mod error;
pub mod registration;

// Re-export primary types at crate root for ergonomic imports.
pub use color::CorPreferida;
pub use cpf::Cpf;
pub use email::Email;
pub use error::ValidationError;
pub use registration::Registration;
