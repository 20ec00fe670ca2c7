//! # Body Extraction
//!
//! Axum's `Json` extractor rejects malformed bodies with its own plain-text
//! response. The submission contract wants every failure in the
//! `{success, message}` envelope, so handlers take the extraction `Result`
//! and funnel rejections through [`AppError::BadRequest`] here.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Unwrap a JSON body extraction, mapping rejections to a 400 envelope.
///
/// Handlers use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // field-level validation happens in the typed constructors...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
