use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::EventBusError;
use crate::event::Event;
use crate::subscriber::{FnSubscriber, Subscriber};

#[derive(Debug)]
struct PingEvent;

impl Event for PingEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct OtherEvent;

impl Event for OtherEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn reports_construction_options() {
    let subscriber = FnSubscriber::new(true, 7, |_: &PingEvent| Ok(()));

    assert_eq!(subscriber.event_type(), TypeId::of::<PingEvent>());
    assert!(subscriber.ignore_cancelled());
    assert_eq!(subscriber.priority(), 7);
}

#[test]
fn invoke_delivers_the_downcast_event() {
    let counter = Arc::new(AtomicU32::new(0));
    let seen = Arc::clone(&counter);
    let subscriber = FnSubscriber::new(false, 0, move |_: &PingEvent| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    subscriber.invoke(&PingEvent).expect("invocation succeeds");
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn invoke_rejects_a_foreign_event_type() {
    let subscriber = FnSubscriber::new(false, 0, |_: &PingEvent| Ok(()));

    let error = subscriber.invoke(&OtherEvent).unwrap_err();
    assert!(matches!(error, EventBusError::InvocationFailed { .. }));
}

#[test]
fn invoke_wraps_callback_failure_with_its_source() {
    let subscriber = FnSubscriber::new(false, 0, |_: &PingEvent| Err("boom".into()));

    match subscriber.invoke(&PingEvent).unwrap_err() {
        EventBusError::InvocationFailed { source, .. } => {
            assert_eq!(source.to_string(), "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
