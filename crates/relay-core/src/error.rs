//! # Relay Core Event Bus Errors
//!
//! Defines error types specific to the event bus.
//!
//! This module includes [`EventBusError`], the primary enum encompassing
//! the errors that can occur during listener registration, handler
//! binding, dispatch-time invocation, or bus configuration.
use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventBusError {
    /// A listener was registered without a receiver object.
    #[error("listener receiver is missing")]
    MissingReceiver,

    /// A declared handler method could not be registered. Aborts the
    /// remaining registration of the listener that declared it.
    #[error("failed to register handler method '{method}': {reason}")]
    RegistrationFailed {
        method: String,
        reason: String,
        #[source]
        source: Option<Box<EventBusError>>,
    },

    /// No invocable handle could be resolved for a declared handler
    /// method. Surfaces as the source of a `RegistrationFailed`.
    #[error("failed to bind handler method '{method}': {reason}")]
    BindingFailed { method: String, reason: String },

    /// A subscriber failed while handling a posted event. Propagates out
    /// of `post` unless a dispatch error handler is installed.
    #[error("subscriber '{subscriber}' failed while handling an event")]
    InvocationFailed {
        subscriber: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The builder was given an invalid configuration value.
    #[error("invalid event bus configuration: {0}")]
    InvalidConfiguration(String),
}
