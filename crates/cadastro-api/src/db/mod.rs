//! # Database Layer
//!
//! Pool construction from environment configuration, idempotent schema
//! creation, and the registration persistence operations.
//!
//! The pool is built lazily: `init_pool` never touches the network, so the
//! process starts even while PostgreSQL is still coming up. The first
//! request that needs a connection pays for it and reports failure through
//! the normal error classification.

pub mod registrations;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;

/// Upper bound on pooled connections. The workload is a single form; a
/// small pool is plenty.
const MAX_CONNECTIONS: u32 = 5;

/// Errors building the database configuration from the environment.
#[derive(Error, Debug)]
pub enum DbConfigError {
    /// A required variable is absent.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is present but unusable.
    #[error("invalid value for {var}: {reason}")]
    InvalidVar {
        /// The offending variable name.
        var: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Database connection parameters, read once at process start.
///
/// `DATABASE_URL` takes precedence when set; otherwise the individual
/// `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_DATABASE`
/// variables are combined. `DB_PORT` defaults to 5432 and `DB_PASSWORD`
/// may be omitted for trust-authenticated setups.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database server host.
    pub host: String,
    /// Database server port.
    pub port: u16,
    /// Role to connect as.
    pub user: String,
    /// Role password, when the server requires one.
    pub password: Option<String>,
    /// Database name.
    pub database: String,
}

impl DbConfig {
    /// Read the individual `DB_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`DbConfigError`] when a required variable is missing or
    /// `DB_PORT` is not a number.
    pub fn from_env() -> Result<Self, DbConfigError> {
        let require = |var: &'static str| {
            std::env::var(var).map_err(|_| DbConfigError::MissingVar(var))
        };

        let port = match std::env::var("DB_PORT") {
            Err(_) => 5432,
            Ok(raw) => raw.parse().map_err(|_| DbConfigError::InvalidVar {
                var: "DB_PORT",
                reason: format!("\"{raw}\" is not a port number"),
            })?,
        };

        Ok(Self {
            host: require("DB_HOST")?,
            port,
            user: require("DB_USER")?,
            password: std::env::var("DB_PASSWORD").ok(),
            database: require("DB_DATABASE")?,
        })
    }

    fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

/// Build the shared connection pool from the environment.
///
/// # Errors
///
/// Returns [`DbConfigError`] when the environment carries no usable
/// database configuration. Connection failures surface later, on first use.
pub fn init_pool() -> Result<PgPool, DbConfigError> {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return PgPool::connect_lazy(&url).map_err(|e| DbConfigError::InvalidVar {
            var: "DATABASE_URL",
            reason: e.to_string(),
        });
    }

    let config = DbConfig::from_env()?;
    Ok(PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy_with(config.connect_options()))
}

/// Create the `usuarios` table when it does not exist yet.
///
/// Runs on every submission, before the insert. The statement is a no-op
/// once the table exists, so repeated execution is safe.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS usuarios (
             cpf VARCHAR(11) PRIMARY KEY,
             nome_completo VARCHAR(255) NOT NULL,
             email VARCHAR(255) NOT NULL,
             cor_preferida VARCHAR(50) NOT NULL,
             observacao TEXT,
             criado_em TIMESTAMPTZ NOT NULL DEFAULT now()
         )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_error_names_the_variable() {
        let err = DbConfigError::MissingVar("DB_HOST");
        assert!(format!("{err}").contains("DB_HOST"));
    }

    #[test]
    fn invalid_var_error_carries_reason() {
        let err = DbConfigError::InvalidVar {
            var: "DB_PORT",
            reason: "\"abc\" is not a port number".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("DB_PORT"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn connect_options_without_password() {
        let config = DbConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "cadastro".to_string(),
            password: None,
            database: "cadastro".to_string(),
        };
        // Just asserting construction succeeds for a passwordless config.
        let _ = config.connect_options();
    }
}
