//! Response encoding: outcome -> status line + JSON body.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::app::endpoint::Errorer;
use crate::app::errors::{self, TransportError};

pub use crate::app::errors::JSON_CONTENT_TYPE;

/// Write a response, or its error if it carries one.
pub fn encode_response<R>(response: R) -> Response
where
    R: Serialize + Errorer,
{
    if let Some(err) = response.error() {
        return encode_error(&TransportError::from(err.clone()));
    }

    match serde_json::to_vec(&response) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `{"error": "<message>"}` with the classified status.
pub fn encode_error(err: &TransportError) -> Response {
    errors::json_error(err.status(), err.to_string())
}
