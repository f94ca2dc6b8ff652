use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codepal_core::LanguageError;

use super::types::ErrorResponse;

/// Failures surfaced to HTTP clients as `{ok: false, error}` with a 400.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            ok: false,
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
