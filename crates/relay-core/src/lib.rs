//! # relay-core
//!
//! A synchronous in-process event bus. Callers register subscribers
//! against concrete event types and later post event instances; every
//! matching subscriber runs on the posting thread, in priority order,
//! with cancellation-aware skipping along the way.
//!
//! Events are matched by their exact runtime type. A subscriber
//! registered for `Ping` sees only `Ping` values, never values of any
//! other type. Within one event type, higher-priority subscribers run
//! first; equal priorities run in registration order. An event may
//! expose the [`Cancellable`] capability, in which case the cancelled
//! flag is re-read after every invocation and subscribers that opted to
//! ignore cancelled events are skipped while it is set.
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! use relay_core::{Event, EventBus};
//!
//! #[derive(Debug)]
//! struct Ping;
//!
//! impl Event for Ping {
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! let bus = EventBus::new();
//! let seen = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&seen);
//! bus.subscribe(move |_: &Ping| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! });
//!
//! bus.post(&Ping)?;
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! # Ok::<(), relay_core::EventBusError>(())
//! ```

pub mod bus;
pub mod error;
pub mod event;
pub mod subscriber;

// Re-export key public types/traits for easier use by consumers.
pub use bus::{DispatchErrorHandler, EventBus, EventBusBuilder};
pub use error::EventBusError;
pub use event::{CancelState, Cancellable, Event};
pub use subscriber::{
    BoundSubscriber, FnSubscriber, HandlerDecl, HandlerResult, Listener, MethodDescriptor,
    Subscriber,
};
