use std::any::{Any, TypeId};

use crate::event::{CancelState, Cancellable, Event};

#[derive(Debug)]
struct PlainEvent;

impl Event for PlainEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
struct StoppableEvent {
    cancel: CancelState,
}

impl Event for StoppableEvent {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_cancellable(&self) -> Option<&dyn Cancellable> {
        Some(&self.cancel)
    }
}

#[test]
fn cancel_state_defaults_to_not_cancelled() {
    let state = CancelState::new();
    assert!(!state.is_cancelled());
}

#[test]
fn cancel_state_can_be_set_and_cleared() {
    let state = CancelState::new();
    state.set_cancelled(true);
    assert!(state.is_cancelled());
    state.set_cancelled(false);
    assert!(!state.is_cancelled());
}

#[test]
fn plain_event_has_no_cancellable_capability() {
    let event = PlainEvent;
    assert!(event.as_cancellable().is_none());
}

#[test]
fn cancellable_event_exposes_its_flag() {
    let event = StoppableEvent::default();
    let cancellable = event.as_cancellable().expect("capability is exposed");
    assert!(!cancellable.is_cancelled());

    cancellable.set_cancelled(true);
    assert!(event.cancel.is_cancelled());
}

#[test]
fn as_any_reports_the_exact_runtime_type() {
    let event: &dyn Event = &PlainEvent;
    assert_eq!(event.as_any().type_id(), TypeId::of::<PlainEvent>());
    assert_ne!(event.as_any().type_id(), TypeId::of::<StoppableEvent>());
}
