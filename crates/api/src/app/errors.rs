use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use cargotrack_handling::HandlingError;

use crate::app::decode::DecodeError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Everything that can end a request without a successful registration.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Handling(#[from] HandlingError),
}

impl TransportError {
    /// A malformed body never reaches the service and is always a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            TransportError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TransportError::Handling(err) => status_for(Some(err)),
        }
    }
}

/// Status code for a business-logic outcome.
pub fn status_for(err: Option<&HandlingError>) -> StatusCode {
    match err {
        None => StatusCode::OK,
        Some(HandlingError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(HandlingError::Other(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
