use std::sync::Arc;

use crate::bus::dispatcher::EventBus;
use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::Subscriber;

/// Hook invoked when a subscriber fails during dispatch.
///
/// When installed on a bus, invocation failures are routed here instead
/// of propagating out of [`EventBus::post`], and the dispatch walk
/// continues with the next subscriber.
pub trait DispatchErrorHandler: Send + Sync {
    fn handle(&self, subscriber: &dyn Subscriber, event: &dyn Event, error: EventBusError);
}

/// Builder for [`EventBus`] to allow easy customization and setup.
///
/// One option is recognized: the dispatch error handler. Leaving it
/// unset keeps the default policy, where invocation failures propagate
/// to the caller of `post`.
#[derive(Default)]
pub struct EventBusBuilder {
    error_handler: Option<Arc<dyn DispatchErrorHandler>>,
}

impl std::fmt::Debug for EventBusBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBusBuilder")
            .field("error_handler", &self.error_handler.as_ref().map(|_| ".."))
            .finish()
    }
}

impl EventBusBuilder {
    pub fn new() -> Self {
        Self {
            error_handler: None,
        }
    }

    /// Install a dispatch error handler.
    ///
    /// Passing `None` is an explicit request for no handler and fails
    /// with [`EventBusError::InvalidConfiguration`]; to keep the default
    /// propagation policy, simply do not call this method.
    pub fn exception_handler(
        mut self,
        handler: Option<Arc<dyn DispatchErrorHandler>>,
    ) -> Result<Self, EventBusError> {
        match handler {
            Some(handler) => {
                self.error_handler = Some(handler);
                Ok(self)
            }
            None => Err(EventBusError::InvalidConfiguration(
                "exception handler cannot be absent".to_string(),
            )),
        }
    }

    /// Build the configured [`EventBus`] instance.
    pub fn build(self) -> EventBus {
        EventBus::with_error_handler(self.error_handler)
    }
}
