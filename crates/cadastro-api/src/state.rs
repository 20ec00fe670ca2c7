//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The database pool is acquired once at process
//! start and travels with the state; there is no global connection and no
//! per-request acquisition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use utoipa::ToSchema;

use cadastro_core::{CorPreferida, Cpf, Email};

/// Application configuration, built from the environment in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state.
///
/// Cloning is cheap: `PgPool` is internally reference-counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: AppConfig,
    /// PostgreSQL connection pool, shared by every handler.
    pub pool: PgPool,
}

impl AppState {
    /// Assemble the application state from configuration and a pool.
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self { config, pool }
    }
}

/// A stored registration, as returned by the lookup endpoint.
///
/// Everything the submission persisted plus the insertion timestamp the
/// database stamped on the row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    /// Canonical 11-digit CPF, the primary key.
    #[schema(value_type = String, example = "11144477735")]
    pub cpf: Cpf,
    /// Registrant's full name.
    pub nome_completo: String,
    /// Contact email address.
    #[schema(value_type = String, example = "maria@example.com")]
    pub email: Email,
    /// Preferred color.
    #[schema(value_type = String, example = "azul")]
    pub cor_preferida: CorPreferida,
    /// Optional free-text note.
    pub observacao: Option<String>,
    /// When the row was inserted (database clock).
    pub criado_em: DateTime<Utc>,
}
