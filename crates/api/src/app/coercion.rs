//! Wire spelling <-> [`HandlingEventType`] mapping.

use std::collections::HashMap;
use std::sync::LazyLock;

use cargotrack_handling::HandlingEventType;

static TABLE: LazyLock<EventTypeTable> = LazyLock::new(EventTypeTable::new);

/// Bidirectional mapping between the five known event types and their wire spelling.
///
/// Lookups never fail: an unrecognized spelling resolves to
/// [`HandlingEventType::Unknown`].
#[derive(Debug, Clone)]
pub struct EventTypeTable {
    by_spelling: HashMap<&'static str, HandlingEventType>,
}

impl EventTypeTable {
    pub fn new() -> Self {
        let by_spelling = HandlingEventType::ALL
            .iter()
            .map(|t| (t.as_str(), *t))
            .collect();
        Self { by_spelling }
    }

    /// Process-wide immutable instance.
    pub fn shared() -> &'static EventTypeTable {
        &TABLE
    }

    pub fn lookup(&self, spelling: &str) -> HandlingEventType {
        self.by_spelling
            .get(spelling)
            .copied()
            .unwrap_or_default()
    }

    /// Wire spelling of a known event type; `None` for `Unknown`.
    pub fn spelling(&self, event_type: HandlingEventType) -> Option<&'static str> {
        event_type.is_known().then(|| event_type.as_str())
    }
}

impl Default for EventTypeTable {
    fn default() -> Self {
        Self::new()
    }
}
