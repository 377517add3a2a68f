use std::sync::Arc;

use crate::command::RegisterHandlingEvent;
use crate::error::HandlingResult;

/// Business-logic boundary for handling event registration.
///
/// Transports hand decoded commands to an implementation of this trait and only
/// look at the outcome. Retries, timeouts and consistency between concurrent
/// registrations for the same cargo are the implementation's concern.
pub trait HandlingService: Send + Sync {
    fn register_handling_event(&self, command: RegisterHandlingEvent) -> HandlingResult<()>;
}

impl<T> HandlingService for Arc<T>
where
    T: HandlingService + ?Sized,
{
    fn register_handling_event(&self, command: RegisterHandlingEvent) -> HandlingResult<()> {
        (**self).register_handling_event(command)
    }
}
