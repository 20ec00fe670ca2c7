//! # cadastro-api — Axum HTTP Service
//!
//! The HTTP layer over the cadastro domain: one submission endpoint with
//! the form's fixed response contract, a CPF-keyed lookup, health probes,
//! and the generated OpenAPI spec.
//!
//! ## API Surface
//!
//! | Route                         | Method | Purpose                         |
//! |-------------------------------|--------|---------------------------------|
//! | `/v1/registrations`           | POST   | Validate and persist a record   |
//! | `/v1/registrations/:cpf`      | GET    | Fetch a stored record           |
//! | `/openapi.json`               | GET    | Generated OpenAPI document      |
//! | `/health/liveness`            | GET    | Process-up probe                |
//! | `/health/readiness`           | GET    | Ready-to-serve probe            |
//!
//! ## Crate Policy
//!
//! - Domain validation lives in `cadastro-core`; handlers only orchestrate.
//! - All errors map to the `{success, message}` envelope via [`AppError`].
//! - The database pool is process-wide, created once in `main` and passed
//!   through [`state::AppState`]; no globals.

pub mod db;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted beside the API routes and stay reachable
/// regardless of database availability.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::registrations::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
