use std::any::Any;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::bus::{DispatchErrorHandler, EventBus};
use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::Subscriber;

#[derive(Debug)]
struct FlakyEvent;

impl Event for FlakyEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
struct CollectingHandler {
    seen: Mutex<Vec<String>>,
}

impl DispatchErrorHandler for CollectingHandler {
    fn handle(&self, _subscriber: &dyn Subscriber, _event: &dyn Event, error: EventBusError) {
        self.seen.lock().unwrap().push(error.to_string());
    }
}

#[test]
fn default_build_propagates_invocation_failures() {
    let bus = EventBus::builder().build();
    bus.subscribe(|_: &FlakyEvent| Err("nope".into()));

    let error = bus.post(&FlakyEvent).unwrap_err();
    assert!(matches!(error, EventBusError::InvocationFailed { .. }));
}

#[test]
fn installed_handler_receives_the_failure_and_dispatch_continues() {
    let handler = Arc::new(CollectingHandler::default());
    let bus = EventBus::builder()
        .exception_handler(Some(Arc::clone(&handler) as Arc<dyn DispatchErrorHandler>))
        .expect("handler accepted")
        .build();

    bus.subscribe_with(false, 9, |_: &FlakyEvent| Err("first failed".into()));
    let invoked = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&invoked);
    bus.subscribe_with(false, 1, move |_: &FlakyEvent| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.post(&FlakyEvent).expect("handled failures do not propagate");

    assert_eq!(invoked.load(Ordering::SeqCst), 1);
    let seen = handler.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("failed while handling an event"));
}

#[test]
fn explicitly_absent_handler_is_an_invalid_configuration() {
    let error = EventBus::builder().exception_handler(None).unwrap_err();
    assert!(matches!(error, EventBusError::InvalidConfiguration(_)));
}
