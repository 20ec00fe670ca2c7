//! Registration persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `usuarios` table.
//! Registrations are immutable once created — there are no update or
//! delete operations, and uniqueness of the CPF is enforced entirely by
//! the primary-key constraint, not by application-level checks.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use cadastro_core::{CorPreferida, Cpf, Email, Registration};

use crate::state::RegistrationRecord;

/// Insert a new registration.
///
/// Exactly one statement; a duplicate CPF surfaces as the driver's
/// unique-violation error and is classified by the caller.
pub async fn insert(pool: &PgPool, registration: &Registration) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO usuarios (cpf, nome_completo, email, cor_preferida, observacao)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(registration.cpf.as_str())
    .bind(&registration.nome_completo)
    .bind(registration.email.as_str())
    .bind(registration.cor_preferida.as_str())
    .bind(&registration.observacao)
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch a registration by its canonical CPF.
pub async fn get_by_cpf(
    pool: &PgPool,
    cpf: &Cpf,
) -> Result<Option<RegistrationRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, RegistrationRow>(
        "SELECT cpf, nome_completo, email, cor_preferida, observacao, criado_em
         FROM usuarios WHERE cpf = $1",
    )
    .bind(cpf.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(RegistrationRow::into_record).transpose()
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct RegistrationRow {
    cpf: String,
    nome_completo: String,
    email: String,
    cor_preferida: String,
    observacao: Option<String>,
    criado_em: DateTime<Utc>,
}

impl RegistrationRow {
    /// Re-type the raw columns into domain values.
    ///
    /// Every stored row passed validation at insert time, so a failure here
    /// means the table was written by something else. Surfaced as a decode
    /// error rather than papered over with a fallback value.
    fn into_record(self) -> Result<RegistrationRecord, sqlx::Error> {
        let typed = || -> Result<RegistrationRecord, cadastro_core::ValidationError> {
            Ok(RegistrationRecord {
                cpf: Cpf::new(self.cpf)?,
                nome_completo: self.nome_completo,
                email: Email::new(self.email)?,
                cor_preferida: self.cor_preferida.parse::<CorPreferida>()?,
                observacao: self.observacao,
                criado_em: self.criado_em,
            })
        };

        typed().map_err(|e| {
            tracing::error!(error = %e, "stored registration fails domain validation");
            sqlx::Error::Decode(Box::new(e))
        })
    }
}
