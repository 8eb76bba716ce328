use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::Subscriber;
use crate::subscriber::listener::{HandlerDecl, MethodThunk};

/// Subscriber wrapping a handler method bound to a receiver object.
pub struct BoundSubscriber<R> {
    receiver: Arc<R>,
    method: &'static str,
    thunk: MethodThunk<R>,
    event_type: TypeId,
    ignore_cancelled: bool,
    priority: i32,
}

impl<R: Send + Sync + 'static> BoundSubscriber<R> {
    /// Resolve the declaration's method and bind it to the receiver.
    ///
    /// Fails with [`EventBusError::BindingFailed`] if the declaration
    /// carries no invocable handle.
    pub fn bind(receiver: Arc<R>, decl: &HandlerDecl<R>) -> Result<Self, EventBusError> {
        let thunk = decl.method.resolve().ok_or_else(|| EventBusError::BindingFailed {
            method: decl.method.name().to_string(),
            reason: "no invocable handle could be resolved for the declared method".to_string(),
        })?;

        Ok(Self {
            receiver,
            method: decl.method.name(),
            thunk,
            event_type: decl.event_type,
            ignore_cancelled: decl.ignore_cancelled,
            priority: decl.priority,
        })
    }
}

impl<R> fmt::Debug for BoundSubscriber<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundSubscriber")
            .field("method", &self.method)
            .field("ignore_cancelled", &self.ignore_cancelled)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl<R: Send + Sync + 'static> Subscriber for BoundSubscriber<R> {
    fn event_type(&self) -> TypeId {
        self.event_type
    }

    fn invoke(&self, event: &dyn Event) -> Result<(), EventBusError> {
        (self.thunk)(&self.receiver, event).map_err(|source| EventBusError::InvocationFailed {
            subscriber: self.method.to_string(),
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
