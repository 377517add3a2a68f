//! Handling domain module.
//!
//! A handling event records something physically done to a cargo (received,
//! loaded, unloaded, cleared through customs, claimed). This crate holds the
//! command that requests one to be registered, the service boundary that
//! performs the registration, and an in-memory service implementation.

pub mod command;
pub mod error;
pub mod event_type;
pub mod in_memory;
pub mod service;

pub use command::{HandlingEvent, RegisterHandlingEvent};
pub use error::{HandlingError, HandlingResult};
pub use event_type::HandlingEventType;
pub use in_memory::InMemoryHandlingService;
pub use service::HandlingService;
