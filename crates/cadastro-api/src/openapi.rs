//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cadastro API",
        version = "0.1.0",
        description = "Registration form backend: CPF-validated submissions persisted to PostgreSQL with duplicate-CPF classification.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::registrations::submit_registration,
        crate::routes::registrations::get_registration,
    ),
    components(schemas(
        crate::routes::registrations::SubmitRegistrationRequest,
        crate::state::RegistrationRecord,
        crate::error::StatusBody,
    )),
    tags(
        (name = "registrations", description = "Registration submission and lookup")
    )
)]
pub struct ApiDoc;

/// Router serving the generated spec.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// GET /openapi.json — the generated OpenAPI document.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
