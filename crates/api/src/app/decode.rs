//! Request decoding: raw JSON body -> [`RegisterHandlingEvent`].
//!
//! Decoding is lenient in the same places a struct-tag JSON decoder is:
//! keys match field names case-insensitively, `null` leaves a field at its zero
//! value, and only the first JSON value in the body is read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use cargotrack_core::{TrackingId, UnLocode, VoyageNumber};
use cargotrack_handling::RegisterHandlingEvent;

use crate::app::coercion::EventTypeTable;

/// The request body could not be turned into a command.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("empty request body")]
    Empty,

    #[error("cannot decode JSON {0} into an incident report")]
    NotAnObject(&'static str),

    #[error("completion time out of range: {0} ms")]
    TimestampOutOfRange(i64),
}

/// Wire shape of `POST /handling/v1/incidents`.
///
/// Missing or `null` fields take their zero value; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegisterIncidentBody {
    /// Epoch milliseconds.
    #[serde(deserialize_with = "null_as_zero")]
    pub completion_time: i64,
    #[serde(rename = "TrackingID", deserialize_with = "null_as_zero")]
    pub tracking_id: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub voyage_number: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub location: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub event_type: String,
}

/// Canonical wire spelling of every body field.
const FIELDS: [&str; 5] = ["CompletionTime", "TrackingID", "VoyageNumber", "Location", "EventType"];

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn same_key(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Rename keys that match a field case-insensitively to the field's spelling.
///
/// When a field is given under several spellings, the exact one wins.
fn canonicalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    let (exact, folded): (Vec<_>, Vec<_>) = map
        .into_iter()
        .map(|(key, value)| match FIELDS.iter().find(|f| same_key(f, &key)) {
            Some(field) => (key.as_str() == *field, field.to_string(), value),
            None => (true, key, value),
        })
        .partition(|(is_exact, _, _)| *is_exact);

    folded
        .into_iter()
        .chain(exact)
        .map(|(_, key, value)| (key, value))
        .collect()
}

impl RegisterIncidentBody {
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                Ok(serde_json::from_value(Value::Object(canonicalize_keys(map)))?)
            }
            Value::Bool(_) => Err(DecodeError::NotAnObject("bool")),
            Value::Number(_) => Err(DecodeError::NotAnObject("number")),
            Value::String(_) => Err(DecodeError::NotAnObject("string")),
            Value::Array(_) => Err(DecodeError::NotAnObject("array")),
        }
    }

    pub fn into_command(self, table: &EventTypeTable) -> Result<RegisterHandlingEvent, DecodeError> {
        Ok(RegisterHandlingEvent {
            completed_at: completion_time_from_millis(self.completion_time)?,
            tracking_id: TrackingId::from(self.tracking_id),
            voyage_number: VoyageNumber::from(self.voyage_number),
            location: UnLocode::from(self.location),
            event_type: table.lookup(&self.event_type),
        })
    }
}

/// Whole seconds since the epoch; the sub-second remainder is dropped (truncating toward zero).
pub fn completion_time_from_millis(millis: i64) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::<Utc>::from_timestamp(millis / 1000, 0).ok_or(DecodeError::TimestampOutOfRange(millis))
}

/// Decode the first JSON value of `body`; anything after it is not read.
pub fn decode_register_incident(body: &[u8]) -> Result<RegisterHandlingEvent, DecodeError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(DecodeError::Empty)??;

    RegisterIncidentBody::from_value(first)?.into_command(EventTypeTable::shared())
}
