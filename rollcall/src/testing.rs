//! Testing utilities for Rollcall.
//!
//! Test doubles for the event-bus collaborator, so discovery's
//! subscription side effects can be observed without a real bus.

use rollcall_core::{EventBus, EventSubscriber};
use std::sync::{Arc, Mutex};

/// An event bus that records the type name of every accepted subscriber.
///
/// # Example
///
/// ```rust,ignore
/// let bus = Arc::new(RecordingBus::new());
/// Discovery::with_set(set, bus.clone()).run()?;
/// assert_eq!(bus.count_of::<OrderMailer>(), 1);
/// ```
#[derive(Default)]
pub struct RecordingBus {
    accepted: Mutex<Vec<&'static str>>,
}

impl RecordingBus {
    /// Create a new recording bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Type names of all accepted subscribers, in acceptance order.
    pub fn accepted(&self) -> Vec<&'static str> {
        self.accepted.lock().unwrap().clone()
    }

    /// Total number of accepted subscribers.
    pub fn count(&self) -> usize {
        self.accepted.lock().unwrap().len()
    }

    /// How many instances of subscriber type `S` were accepted.
    pub fn count_of<S: EventSubscriber>(&self) -> usize {
        let name = std::any::type_name::<S>();
        self.accepted
            .lock()
            .unwrap()
            .iter()
            .filter(|accepted| **accepted == name)
            .count()
    }
}

impl EventBus for RecordingBus {
    fn accept(&self, subscriber: Arc<dyn EventSubscriber>) {
        self.accepted.lock().unwrap().push(subscriber.name());
    }
}

/// An event bus that drops every subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBus;

impl EventBus for NullBus {
    fn accept(&self, _subscriber: Arc<dyn EventSubscriber>) {}
}
