//! Binding between the transport and the handling service.

use serde::Serialize;

use cargotrack_handling::{HandlingError, HandlingService, RegisterHandlingEvent};

/// Responses that may carry a business-logic failure.
///
/// The encoder asks this first: a response with an error is written as an
/// error envelope, one without is serialized as-is.
pub trait Errorer {
    fn error(&self) -> Option<&HandlingError>;
}

/// Outcome of `register_incident`. Carries no payload, so it serializes to `{}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterIncidentResponse {
    #[serde(skip)]
    pub err: Option<HandlingError>,
}

impl Errorer for RegisterIncidentResponse {
    fn error(&self) -> Option<&HandlingError> {
        self.err.as_ref()
    }
}

/// Hand the command to the service verbatim and capture the outcome.
pub fn register_incident_endpoint(
    service: &dyn HandlingService,
    command: RegisterHandlingEvent,
) -> RegisterIncidentResponse {
    RegisterIncidentResponse {
        err: service.register_handling_event(command).err(),
    }
}
