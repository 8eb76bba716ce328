//! Subscriber representations and the contract the bus dispatches over.
//!
//! Two variants exist: [`FnSubscriber`] wraps a caller-supplied callback
//! registered directly against an event type, and [`BoundSubscriber`]
//! wraps a handler method resolved from a [`Listener`] declaration and
//! bound to a receiver object. The bus never distinguishes them; it only
//! sees the [`Subscriber`] contract.

pub mod bound;
pub mod direct;
pub mod listener;

use std::any::TypeId;
use std::error::Error as StdError;
use std::fmt;

use crate::error::EventBusError;
use crate::event::Event;

/// Result type returned by subscriber callbacks and bound handler
/// methods.
pub type HandlerResult = Result<(), Box<dyn StdError + Send + Sync>>;

/// Contract every registered subscriber satisfies.
pub trait Subscriber: fmt::Debug + Send + Sync {
    /// Exact runtime type of the events this subscriber wants.
    fn event_type(&self) -> TypeId;

    /// Deliver an event. A failure raised by the underlying callback or
    /// method is wrapped into [`EventBusError::InvocationFailed`] with
    /// the original error as its source.
    fn invoke(&self, event: &dyn Event) -> Result<(), EventBusError>;

    /// Whether this subscriber is skipped while the event is cancelled.
    fn ignore_cancelled(&self) -> bool;

    /// Ordering key; higher values are serviced first.
    fn priority(&self) -> i32;
}

// Re-export important types
pub use bound::BoundSubscriber;
pub use direct::FnSubscriber;
pub use listener::{HandlerDecl, Listener, MethodDescriptor};

// Test module declaration
#[cfg(test)]
mod tests;
