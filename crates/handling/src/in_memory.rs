use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use cargotrack_core::{TrackingId, UnLocode, VoyageNumber};

use crate::command::{HandlingEvent, RegisterHandlingEvent};
use crate::error::{HandlingError, HandlingResult};
use crate::service::HandlingService;

/// Sample cargos seeded by [`InMemoryHandlingService::with_sample_data`].
pub const SAMPLE_CARGOS: [&str; 2] = ["ABC123", "FGH456"];

/// Sample voyages seeded by [`InMemoryHandlingService::with_sample_data`].
pub const SAMPLE_VOYAGES: [&str; 5] = ["V001", "V100", "V200", "V300", "V400"];

/// Sample locations seeded by [`InMemoryHandlingService::with_sample_data`].
pub const SAMPLE_LOCATIONS: [&str; 9] = [
    "SESTO", "AUMEL", "CNHKG", "USNYC", "USCHI", "JNTKO", "DEHAM", "NLRTM", "FIHEL",
];

#[derive(Debug, Default)]
struct Registry {
    cargos: HashSet<TrackingId>,
    voyages: HashSet<VoyageNumber>,
    locations: HashSet<UnLocode>,
}

/// In-memory handling service.
///
/// Intended for tests/dev. Knows a fixed set of cargos, voyages and locations
/// and keeps an append-only log of accepted handling events per cargo.
#[derive(Debug, Default)]
pub struct InMemoryHandlingService {
    registry: RwLock<Registry>,
    history: RwLock<HashMap<TrackingId, Vec<HandlingEvent>>>,
}

impl InMemoryHandlingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service pre-populated with the `SAMPLE_*` cargos, voyages and locations.
    pub fn with_sample_data() -> Self {
        let registry = Registry {
            cargos: SAMPLE_CARGOS.iter().copied().map(TrackingId::from).collect(),
            voyages: SAMPLE_VOYAGES.iter().copied().map(VoyageNumber::from).collect(),
            locations: SAMPLE_LOCATIONS.iter().copied().map(UnLocode::from).collect(),
        };

        Self {
            registry: RwLock::new(registry),
            history: RwLock::default(),
        }
    }

    pub fn add_cargo(&self, id: TrackingId) -> HandlingResult<()> {
        self.registry_mut()?.cargos.insert(id);
        Ok(())
    }

    pub fn add_voyage(&self, number: VoyageNumber) -> HandlingResult<()> {
        self.registry_mut()?.voyages.insert(number);
        Ok(())
    }

    pub fn add_location(&self, code: UnLocode) -> HandlingResult<()> {
        self.registry_mut()?.locations.insert(code);
        Ok(())
    }

    /// Accepted handling events for a cargo, in registration order.
    pub fn handling_history(&self, id: &TrackingId) -> HandlingResult<Vec<HandlingEvent>> {
        let history = self
            .history
            .read()
            .map_err(|_| HandlingError::other("lock poisoned"))?;
        Ok(history.get(id).cloned().unwrap_or_default())
    }

    fn registry_mut(&self) -> HandlingResult<std::sync::RwLockWriteGuard<'_, Registry>> {
        self.registry
            .write()
            .map_err(|_| HandlingError::other("lock poisoned"))
    }

    fn ensure_complete(command: &RegisterHandlingEvent) -> HandlingResult<()> {
        let missing_voyage =
            command.event_type.requires_voyage() && command.voyage_number.is_empty();

        if command.completed_at == DateTime::<Utc>::UNIX_EPOCH
            || command.tracking_id.is_empty()
            || command.location.is_empty()
            || !command.event_type.is_known()
            || missing_voyage
        {
            return Err(HandlingError::invalid_argument());
        }
        Ok(())
    }

    fn ensure_known(&self, command: &RegisterHandlingEvent) -> HandlingResult<()> {
        let registry = self
            .registry
            .read()
            .map_err(|_| HandlingError::other("lock poisoned"))?;

        if !registry.cargos.contains(&command.tracking_id) {
            return Err(HandlingError::unknown_cargo());
        }
        if !command.voyage_number.is_empty() && !registry.voyages.contains(&command.voyage_number)
        {
            return Err(HandlingError::other("unknown voyage"));
        }
        if !registry.locations.contains(&command.location) {
            return Err(HandlingError::other("unknown location"));
        }
        Ok(())
    }
}

impl HandlingService for InMemoryHandlingService {
    fn register_handling_event(&self, command: RegisterHandlingEvent) -> HandlingResult<()> {
        Self::ensure_complete(&command)?;
        self.ensure_known(&command)?;

        let event = HandlingEvent::from_command(command, Utc::now());

        let mut history = self
            .history
            .write()
            .map_err(|_| HandlingError::other("lock poisoned"))?;

        tracing::info!(
            tracking_id = %event.tracking_id,
            voyage_number = %event.voyage_number,
            location = %event.location,
            event_type = %event.event_type,
            completed_at = %event.completed_at,
            "handling event registered"
        );

        history
            .entry(event.tracking_id.clone())
            .or_default()
            .push(event);

        Ok(())
    }
}
