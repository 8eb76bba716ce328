use std::any::{TypeId, type_name};
use std::fmt;

use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::{HandlerResult, Subscriber};

/// Subscriber wrapping a caller-supplied callback for one event type.
///
/// Construction cannot fail; the event type is fixed by the callback's
/// parameter type.
pub struct FnSubscriber<E: Event> {
    callback: Box<dyn Fn(&E) -> HandlerResult + Send + Sync>,
    ignore_cancelled: bool,
    priority: i32,
}

impl<E: Event> FnSubscriber<E> {
    pub fn new<F>(ignore_cancelled: bool, priority: i32, callback: F) -> Self
    where
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
            ignore_cancelled,
            priority,
        }
    }
}

// Manual Debug implementation; the callback itself is opaque.
impl<E: Event> fmt::Debug for FnSubscriber<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubscriber")
            .field("event", &type_name::<E>())
            .field("ignore_cancelled", &self.ignore_cancelled)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl<E: Event> Subscriber for FnSubscriber<E> {
    fn event_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn invoke(&self, event: &dyn Event) -> Result<(), EventBusError> {
        let event = event.as_any().downcast_ref::<E>().ok_or_else(|| {
            EventBusError::InvocationFailed {
                subscriber: type_name::<E>().to_string(),
                source: format!("event is not an instance of {}", type_name::<E>()).into(),
            }
        })?;

        (self.callback)(event).map_err(|source| EventBusError::InvocationFailed {
            subscriber: type_name::<E>().to_string(),
            source,
        })
    }

    fn ignore_cancelled(&self) -> bool {
        self.ignore_cancelled
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
