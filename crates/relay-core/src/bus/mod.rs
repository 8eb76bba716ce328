//! The dispatch engine: the subscriber registry, priority-ordered
//! insertion, and the cancellation-aware dispatch loop.

pub mod builder;
pub mod dispatcher;

// Re-export important types
pub use builder::{DispatchErrorHandler, EventBusBuilder};
pub use dispatcher::EventBus;

// Test module declaration
#[cfg(test)]
mod tests;
