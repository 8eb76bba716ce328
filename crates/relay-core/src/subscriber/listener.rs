//! The declaration side of bound-method registration.
//!
//! A [`Listener`] publishes one [`HandlerDecl`] per handler method it
//! wants registered. Each declaration carries the target event type, the
//! subscriber options, and a [`MethodDescriptor`] for the method itself,
//! which the bus binds to a receiver at registration time. This is the
//! boundary where a code-generation step (or a hand-written impl) would
//! plug in: it only has to emit declarations with this shape.

use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use crate::event::Event;
use crate::subscriber::HandlerResult;

/// Invocable handle awaiting a receiver of type `R`.
pub(crate) type MethodThunk<R> = Arc<dyn Fn(&R, &dyn Event) -> HandlerResult + Send + Sync>;

/// Receivers that declare handler methods for registration via
/// [`EventBus::subscribe_listener`](crate::bus::EventBus::subscribe_listener).
pub trait Listener: Send + Sync + 'static {
    /// The handler declarations this listener publishes.
    fn handlers() -> Vec<HandlerDecl<Self>>
    where
        Self: Sized;
}

/// Description of one handler method declared by a [`Listener`]: the
/// method name, its declared parameter count, and (when the declaration
/// is well formed) a thunk that invokes it on a receiver.
pub struct MethodDescriptor<R> {
    name: &'static str,
    param_count: usize,
    thunk: Option<MethodThunk<R>>,
}

impl<R: Send + Sync + 'static> MethodDescriptor<R> {
    /// Descriptor for a well-formed handler taking exactly one event
    /// parameter.
    pub fn unary<E, F>(name: &'static str, method: F) -> Self
    where
        E: Event,
        F: Fn(&R, &E) -> HandlerResult + Send + Sync + 'static,
    {
        let thunk: MethodThunk<R> = Arc::new(move |receiver: &R, event: &dyn Event| {
            match event.as_any().downcast_ref::<E>() {
                Some(event) => method(receiver, event),
                None => Err(format!("event is not an instance of {}", type_name::<E>()).into()),
            }
        });

        Self {
            name,
            param_count: 1,
            thunk: Some(thunk),
        }
    }

    /// Descriptor for a declaration that could not be resolved to an
    /// invocable handle. Carries the declared parameter count so
    /// registration can report arity errors faithfully.
    pub fn declared(name: &'static str, param_count: usize) -> Self {
        Self {
            name,
            param_count,
            thunk: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn param_count(&self) -> usize {
        self.param_count
    }

    pub(crate) fn resolve(&self) -> Option<MethodThunk<R>> {
        self.thunk.clone()
    }
}

impl<R> fmt::Debug for MethodDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("param_count", &self.param_count)
            .field("resolved", &self.thunk.is_some())
            .finish()
    }
}

/// One declared handler: the (event type, priority, ignore-cancelled,
/// method descriptor) tuple a listener publishes.
#[derive(Debug)]
pub struct HandlerDecl<R> {
    pub(crate) event_type: TypeId,
    pub(crate) priority: i32,
    pub(crate) ignore_cancelled: bool,
    pub(crate) method: MethodDescriptor<R>,
}

impl<R: Send + Sync + 'static> HandlerDecl<R> {
    /// Declare a handler for events of type `E` with default options:
    /// priority 0, cancelled events still delivered.
    pub fn new<E, F>(name: &'static str, method: F) -> Self
    where
        E: Event,
        F: Fn(&R, &E) -> HandlerResult + Send + Sync + 'static,
    {
        Self::from_descriptor::<E>(MethodDescriptor::unary::<E, F>(name, method))
    }

    /// Declare a handler from a raw descriptor, keyed to events of type
    /// `E`.
    pub fn from_descriptor<E: Event>(method: MethodDescriptor<R>) -> Self {
        Self {
            event_type: TypeId::of::<E>(),
            priority: 0,
            ignore_cancelled: false,
            method,
        }
    }

    /// Ordering key; higher values are serviced first.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Skip this handler while the event is cancelled.
    pub fn ignore_cancelled(mut self, ignore: bool) -> Self {
        self.ignore_cancelled = ignore;
        self
    }
}
