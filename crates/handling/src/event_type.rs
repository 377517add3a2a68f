/// Classification of a physical cargo event.
///
/// `Unknown` is the zero value: it is what an unrecognized spelling resolves to.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HandlingEventType {
    #[default]
    Unknown,
    Receive,
    Load,
    Unload,
    Customs,
    Claim,
}

impl HandlingEventType {
    /// The five known event types (everything but `Unknown`).
    pub const ALL: [HandlingEventType; 5] = [
        HandlingEventType::Receive,
        HandlingEventType::Load,
        HandlingEventType::Unload,
        HandlingEventType::Customs,
        HandlingEventType::Claim,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlingEventType::Unknown => "UNKNOWN",
            HandlingEventType::Receive => "RECEIVE",
            HandlingEventType::Load => "LOAD",
            HandlingEventType::Unload => "UNLOAD",
            HandlingEventType::Customs => "CUSTOMS",
            HandlingEventType::Claim => "CLAIM",
        }
    }

    /// Loading and unloading happen on board a voyage; the other events don't.
    pub fn requires_voyage(&self) -> bool {
        matches!(self, HandlingEventType::Load | HandlingEventType::Unload)
    }

    pub fn is_known(&self) -> bool {
        *self != HandlingEventType::Unknown
    }
}

impl core::fmt::Display for HandlingEventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
