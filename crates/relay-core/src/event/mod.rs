//! Event identity and the optional cancellation capability.
//!
//! An [`Event`] is any value posted through the bus; it is identified by
//! its exact runtime type, obtained through [`Event::as_any`]. There is
//! no dispatch across type boundaries: a subscriber registered for one
//! type never sees values of another type, related or not.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Core event trait.
///
/// Implementors only need to provide [`as_any`](Event::as_any); events
/// that carry a mutable cancelled flag additionally override
/// [`as_cancellable`](Event::as_cancellable) to expose it.
pub trait Event: Any + fmt::Debug + Send + Sync {
    /// Cast to `Any` for downcasting. Also supplies the exact runtime
    /// type used as the registry key.
    fn as_any(&self) -> &dyn Any;

    /// Expose the cancellation capability, if this event carries one.
    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        None
    }
}

/// Mutable cancelled-state capability an event may expose.
///
/// The bus re-reads this flag after every subscriber invocation, so a
/// subscriber running early in priority order can cancel the event and
/// cause later subscribers that ignore cancelled events to be skipped.
pub trait Cancellable: Send + Sync {
    fn is_cancelled(&self) -> bool;

    fn set_cancelled(&self, cancelled: bool);
}

/// Atomic cancelled flag for events to embed.
///
/// Subscribers receive events by shared reference, so the flag uses an
/// `AtomicBool` rather than requiring exclusive access to flip it.
#[derive(Debug, Default)]
pub struct CancelState(AtomicBool);

impl CancelState {
    pub fn new() -> Self {
        Self(AtomicBool::new(false))
    }
}

impl Cancellable for CancelState {
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set_cancelled(&self, cancelled: bool) {
        self.0.store(cancelled, Ordering::SeqCst);
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
