use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::bus::builder::{DispatchErrorHandler, EventBusBuilder};
use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::{BoundSubscriber, FnSubscriber, HandlerResult, Listener, Subscriber};

/// Sequence of subscribers for one event type.
///
/// The backing vector is never mutated in place once shared: insertion
/// clones it (via `Arc::make_mut`) and swaps the new version into the
/// registry, so a `post` in flight keeps iterating the snapshot it
/// already acquired.
type SubscriberSeq = Arc<Vec<Arc<dyn Subscriber>>>;

/// Synchronous in-process event bus.
///
/// Subscribers are registered per concrete event type and kept in
/// non-increasing priority order; equal priorities keep registration
/// order. [`post`](EventBus::post) runs every eligible subscriber on the
/// calling thread before returning.
///
/// Registration and posting are safe from multiple threads. The registry
/// map is sharded and each type's sequence is copy-on-write, so posts
/// never observe a torn list and operations on one event type do not
/// block operations on another.
pub struct EventBus {
    subscribers: DashMap<TypeId, SubscriberSeq>,
    error_handler: Option<Arc<dyn DispatchErrorHandler>>,
}

// Manual Debug implementation for EventBus
impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.subscribers.len())
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}

impl EventBus {
    /// Create a bus with an empty registry and the default failure
    /// policy (invocation errors propagate out of `post`).
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
            error_handler: None,
        }
    }

    /// Start building a bus with custom configuration.
    pub fn builder() -> EventBusBuilder {
        EventBusBuilder::new()
    }

    pub(crate) fn with_error_handler(error_handler: Option<Arc<dyn DispatchErrorHandler>>) -> Self {
        Self {
            subscribers: DashMap::new(),
            error_handler,
        }
    }

    /// Subscribe a callback for events of type `E` with default options:
    /// priority 0, cancelled events still delivered.
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        self.subscribe_with(false, 0, callback);
    }

    /// Subscribe a callback for events of type `E`.
    ///
    /// Higher `priority` values are serviced first. If
    /// `ignore_cancelled` is set, the callback is skipped while the
    /// event's cancelled flag is set.
    pub fn subscribe_with<E, F>(&self, ignore_cancelled: bool, priority: i32, callback: F)
    where
        E: Event,
        F: Fn(&E) -> HandlerResult + Send + Sync + 'static,
    {
        self.insert_sorted(Arc::new(FnSubscriber::new(ignore_cancelled, priority, callback)));
    }

    /// Register every handler method a listener declares, bound to the
    /// given receiver.
    ///
    /// Fails with [`EventBusError::MissingReceiver`] when the receiver
    /// is absent, and with [`EventBusError::RegistrationFailed`] when a
    /// declared handler does not take exactly one event parameter or
    /// cannot be bound. Validation and binding happen for all declared
    /// handlers before any is inserted: the first failure aborts the
    /// whole registration and leaves zero subscribers from this
    /// receiver in the registry.
    pub fn subscribe_listener<L: Listener>(
        &self,
        receiver: Option<Arc<L>>,
    ) -> Result<(), EventBusError> {
        let receiver = receiver.ok_or(EventBusError::MissingReceiver)?;
        let decls = L::handlers();

        let mut bound: Vec<Arc<dyn Subscriber>> = Vec::with_capacity(decls.len());
        for decl in &decls {
            let params = decl.method.param_count();
            if params != 1 {
                return Err(EventBusError::RegistrationFailed {
                    method: decl.method.name().to_string(),
                    reason: format!("handler must take exactly one event parameter, found {params}"),
                    source: None,
                });
            }

            let subscriber = BoundSubscriber::bind(Arc::clone(&receiver), decl).map_err(|cause| {
                EventBusError::RegistrationFailed {
                    method: decl.method.name().to_string(),
                    reason: "could not bind handler to receiver".to_string(),
                    source: Some(Box::new(cause)),
                }
            })?;
            bound.push(Arc::new(subscriber));
        }

        log::debug!(
            "registering {} handler(s) declared by {}",
            bound.len(),
            type_name::<L>()
        );
        for subscriber in bound {
            self.insert_sorted(subscriber);
        }
        Ok(())
    }

    /// Post an event to every subscriber registered for its exact
    /// runtime type.
    ///
    /// Subscribers run synchronously on the calling thread, front to
    /// back through the priority-ordered sequence. The event's cancelled
    /// flag (if it exposes one) is re-read after every invocation, so an
    /// earlier subscriber can cancel the event and cause later
    /// ignore-cancelled subscribers to be skipped. Posting a type with
    /// no subscribers is a no-op.
    ///
    /// An invocation failure propagates out immediately, skipping the
    /// remaining subscribers of this call, unless a
    /// [`DispatchErrorHandler`] was configured, in which case the
    /// handler is invoked and the walk continues. The registry is left
    /// intact either way.
    pub fn post(&self, event: &dyn Event) -> Result<(), EventBusError> {
        let type_id = event.as_any().type_id();
        let Some(snapshot) = self.subscribers.get(&type_id).map(|entry| Arc::clone(entry.value()))
        else {
            return Ok(());
        };

        let cancellable = event.as_cancellable();
        let mut cancelled = cancellable.is_some_and(|c| c.is_cancelled());

        for subscriber in snapshot.iter() {
            if cancelled && subscriber.ignore_cancelled() {
                log::trace!("skipping {subscriber:?}: event is cancelled");
                continue;
            }

            if let Err(error) = subscriber.invoke(event) {
                match &self.error_handler {
                    Some(handler) => handler.handle(subscriber.as_ref(), event, error),
                    None => return Err(error),
                }
            }

            // A subscriber may have just flipped the flag.
            if let Some(cancellable) = cancellable {
                cancelled = cancellable.is_cancelled();
            }
        }
        Ok(())
    }

    /// Number of event types with at least one registered subscriber.
    ///
    /// This counts *types*, not subscribers: two subscribers for the
    /// same event type contribute 1.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Insert into the event type's sequence, keeping it ordered by
    /// non-increasing priority: the new entry goes after every existing
    /// entry with priority greater than or equal to its own, which also
    /// keeps equal-priority entries in registration order.
    fn insert_sorted(&self, subscriber: Arc<dyn Subscriber>) {
        let mut entry = self.subscribers.entry(subscriber.event_type()).or_default();
        let sequence = Arc::make_mut(entry.value_mut());
        let at = sequence
            .iter()
            .position(|existing| existing.priority() < subscriber.priority())
            .unwrap_or(sequence.len());
        log::trace!("inserting {subscriber:?} at position {at}");
        sequence.insert(at, subscriber);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
