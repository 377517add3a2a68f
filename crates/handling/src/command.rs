use chrono::{DateTime, Utc};

use cargotrack_core::{TrackingId, UnLocode, VoyageNumber};

use crate::event_type::HandlingEventType;

/// Command: RegisterHandlingEvent.
///
/// Built once per incoming report and handed to a [`crate::HandlingService`] by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterHandlingEvent {
    pub completed_at: DateTime<Utc>,
    pub tracking_id: TrackingId,
    pub voyage_number: VoyageNumber,
    pub location: UnLocode,
    pub event_type: HandlingEventType,
}

/// Fact: a handling event that a service accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlingEvent {
    pub tracking_id: TrackingId,
    pub voyage_number: VoyageNumber,
    pub location: UnLocode,
    pub event_type: HandlingEventType,
    pub completed_at: DateTime<Utc>,
    pub registered_at: DateTime<Utc>,
}

impl HandlingEvent {
    pub fn from_command(command: RegisterHandlingEvent, registered_at: DateTime<Utc>) -> Self {
        Self {
            tracking_id: command.tracking_id,
            voyage_number: command.voyage_number,
            location: command.location,
            event_type: command.event_type,
            completed_at: command.completed_at,
            registered_at,
        }
    }
}
