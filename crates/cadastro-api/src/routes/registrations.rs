//! # Registration Routes
//!
//! The submission endpoint the form posts to, plus a CPF-keyed lookup.
//!
//! The submission contract is fixed by the form client:
//! - wire field names are camelCase Portuguese (`nomeCompleto`, `cpf`,
//!   `email`, `corPreferida`, `observacao`);
//! - every response is the `{success, message}` envelope;
//! - statuses are 200 (stored), 400 (rejected input or duplicate CPF or
//!   storage refusal), 405 (wrong method), 500 (unexpected failure, with
//!   the error detail appended to the message).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use cadastro_core::{CorPreferida, Cpf, Email, Registration, ValidationError};

use crate::db;
use crate::error::{AppError, StatusBody};
use crate::extractors::extract_json;
use crate::state::{AppState, RegistrationRecord};

/// Submission payload, exactly as the form serializes it.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRegistrationRequest {
    /// Registrant's full name.
    pub nome_completo: String,
    /// CPF, masked (`111.444.777-35`) or digits-only.
    pub cpf: String,
    /// Contact email address.
    pub email: String,
    /// Preferred color; anything outside the palette is rejected during
    /// deserialization, before a handler ever runs.
    #[schema(value_type = String, example = "azul")]
    pub cor_preferida: CorPreferida,
    /// Optional free-text note.
    #[serde(default)]
    pub observacao: Option<String>,
}

impl SubmitRegistrationRequest {
    /// Promote the raw payload into a validated [`Registration`].
    ///
    /// The typed constructors do the work: CPF checksum, email shape,
    /// non-empty name. The color was already proven by deserialization.
    fn into_registration(self) -> Result<Registration, ValidationError> {
        let cpf = Cpf::new(self.cpf)?;
        let email = Email::new(self.email)?;
        Registration::new(
            cpf,
            self.nome_completo,
            email,
            self.cor_preferida,
            self.observacao,
        )
    }
}

/// Build the registrations router.
///
/// Both routes override the method fallback so that a wrong method gets
/// the contractual 405 envelope instead of Axum's bare 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/registrations",
            post(submit_registration).fallback(method_not_allowed),
        )
        .route(
            "/v1/registrations/:cpf",
            get(get_registration).fallback(method_not_allowed),
        )
}

/// Shared 405 responder for unsupported methods on known routes.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// POST /v1/registrations — validate and persist a registration.
#[utoipa::path(
    post,
    path = "/v1/registrations",
    request_body = SubmitRegistrationRequest,
    responses(
        (status = 200, description = "Registration stored", body = StatusBody),
        (status = 400, description = "Rejected input, duplicate CPF, or storage refusal", body = StatusBody),
        (status = 405, description = "Wrong method", body = StatusBody),
        (status = 500, description = "Unexpected server failure", body = StatusBody),
    ),
    tag = "registrations"
)]
pub(crate) async fn submit_registration(
    State(state): State<AppState>,
    body: Result<Json<SubmitRegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusBody>), AppError> {
    let request = extract_json(body)?;
    let registration = request.into_registration()?;

    // Schema bootstrap is part of every submission; a failure here is not a
    // storage classification but an unexpected server error.
    db::ensure_schema(&state.pool)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // One statement, one row. Unique violations become DuplicateCpf through
    // the From<sqlx::Error> classification.
    db::registrations::insert(&state.pool, &registration).await?;

    tracing::info!(cpf = %registration.cpf, "registration stored");
    Ok((
        StatusCode::OK,
        Json(StatusBody::ok("Formulário enviado com sucesso!")),
    ))
}

/// GET /v1/registrations/:cpf — fetch a stored registration.
#[utoipa::path(
    get,
    path = "/v1/registrations/{cpf}",
    params(("cpf" = String, Path, description = "CPF, masked or digits-only")),
    responses(
        (status = 200, description = "Registration found", body = RegistrationRecord),
        (status = 400, description = "Malformed CPF", body = StatusBody),
        (status = 404, description = "No registration under that CPF", body = StatusBody),
    ),
    tag = "registrations"
)]
pub(crate) async fn get_registration(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<RegistrationRecord>, AppError> {
    let cpf = Cpf::new(cpf)?;

    let record = db::registrations::get_by_cpf(&state.pool, &cpf)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    record
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("cadastro não encontrado para o CPF {cpf}")))
}
