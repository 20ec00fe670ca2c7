//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure maps to the same `{success, message}` envelope the client
//! renders, with the status-code contract the form depends on: 400 for
//! anything the submitter can fix or a duplicate, 404 for a missing lookup,
//! 405 for a wrong method, 500 for unexpected server failures.
//!
//! Database errors are logged with their driver detail but reach the client
//! as a fixed retry-later message; only the 500 path echoes the underlying
//! error text, because the client appends it to its server-error display.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use cadastro_core::ValidationError;

/// The `{success, message}` envelope every submission response uses,
/// success and failure alike.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome message, in the form's language.
    pub message: String,
}

impl StatusBody {
    /// Build a success envelope.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed (400).
    #[error("{0}")]
    BadRequest(String),

    /// A field failed domain validation (400).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The CPF is already registered, a primary-key violation (400).
    #[error("Usuário já cadastrado com esse CPF.")]
    DuplicateCpf,

    /// The database rejected the operation for any other reason (400).
    /// The driver error is logged, never sent to the client.
    #[error("Ocorreu um erro ao enviar o formulário. Tente novamente mais tarde.")]
    Storage(#[source] sqlx::Error),

    /// Lookup target does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The route exists but not for this HTTP method (405).
    #[error("Método não permitido.")]
    MethodNotAllowed,

    /// Unexpected server failure (500). The client appends the detail to
    /// its server-error display, so it is part of the message.
    #[error("Erro no servidor. Tente novamente mais tarde. {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) | Self::DuplicateCpf | Self::Storage(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Classify database errors: a unique violation on the primary key means
/// the CPF was already registered; everything else is a generic storage
/// failure the submitter may retry.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::DuplicateCpf;
            }
        }
        Self::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Operator visibility for everything the client is not told.
        match &self {
            Self::Storage(source) => {
                tracing::error!(error = %source, "database error during request");
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "unexpected server error");
            }
            _ => {}
        }

        let body = StatusBody {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_status() {
        let err = AppError::BadRequest("malformed JSON".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_status() {
        let err = AppError::Validation(ValidationError::EmptyNomeCompleto);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_status_and_message() {
        let err = AppError::DuplicateCpf;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(format!("{err}"), "Usuário já cadastrado com esse CPF.");
    }

    #[test]
    fn not_found_status() {
        let err = AppError::NotFound("cadastro não encontrado".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn method_not_allowed_status_and_message() {
        let err = AppError::MethodNotAllowed;
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(format!("{err}"), "Método não permitido.");
    }

    #[test]
    fn internal_status_appends_detail() {
        let err = AppError::Internal("connection refused".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let msg = format!("{err}");
        assert!(msg.starts_with("Erro no servidor."));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn storage_hides_driver_detail() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let msg = format!("{err}");
        assert!(msg.contains("Tente novamente mais tarde"));
        assert!(!msg.to_lowercase().contains("row"));
    }

    #[test]
    fn non_database_sqlx_error_is_storage() {
        let err = AppError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn validation_error_converts() {
        let core_err = ValidationError::InvalidCpf("123".to_string());
        let err = AppError::from(core_err);
        assert!(matches!(err, AppError::Validation(_)));
        assert!(format!("{err}").contains("123"));
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Helper to extract status and envelope from a response.
    async fn response_parts(err: AppError) -> (StatusCode, StatusBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: StatusBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_duplicate() {
        let (status, body) = response_parts(AppError::DuplicateCpf).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.message, "Usuário já cadastrado com esse CPF.");
    }

    #[tokio::test]
    async fn into_response_method_not_allowed() {
        let (status, body) = response_parts(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(!body.success);
        assert_eq!(body.message, "Método não permitido.");
    }

    #[tokio::test]
    async fn into_response_internal_carries_detail() {
        let (status, body) = response_parts(AppError::Internal("disk on fire".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert!(body.message.contains("disk on fire"));
    }

    #[tokio::test]
    async fn into_response_storage_is_generic() {
        let (status, body) = response_parts(AppError::Storage(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(
            body.message,
            "Ocorreu um erro ao enviar o formulário. Tente novamente mais tarde."
        );
    }

    #[test]
    fn success_envelope() {
        let body = StatusBody::ok("Formulário enviado com sucesso!");
        assert!(body.success);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"success\":true"));
    }
}
