use std::sync::Arc;

use axum::{body::Bytes, extract::Extension, response::Response};

use cargotrack_handling::HandlingService;

use crate::app::endpoint::{self, Errorer};
use crate::app::errors::TransportError;
use crate::app::{decode, encode};

/// `POST /handling/v1/incidents`: decode, hand to the service, encode the outcome.
pub async fn register_incident(
    Extension(service): Extension<Arc<dyn HandlingService>>,
    body: Bytes,
) -> Response {
    let command = match decode::decode_register_incident(&body) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed incident report");
            return encode::encode_error(&TransportError::from(e));
        }
    };

    let tracking_id = command.tracking_id.clone();
    let event_type = command.event_type;

    let response = endpoint::register_incident_endpoint(service.as_ref(), command);

    match response.error() {
        None => tracing::debug!(%tracking_id, %event_type, "incident registered"),
        Some(e) if e.is_not_found() => {
            tracing::warn!(%tracking_id, %event_type, error = %e, "incident references unknown entity")
        }
        Some(e) => tracing::error!(%tracking_id, %event_type, error = %e, "incident registration failed"),
    }

    encode::encode_response(response)
}
