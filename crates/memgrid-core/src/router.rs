//! Scoped input subscriptions.
//!
//! A view receives input only while it holds a [`Subscription`]. Dropping
//! the guard (view torn down or replaced) removes the sink, so a handler
//! can never outlive its view or fire twice because two copies mounted.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use memgrid_types::input::InputEvent;

/// Something that consumes input events.
pub trait InputSink {
    /// Handle one event. Returns `true` if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent) -> bool;
}

/// Shared handle to a sink.
pub type SinkRef = Rc<RefCell<dyn InputSink>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    sinks: Vec<(SubscriptionId, SinkRef)>,
}

impl Registry {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.sinks.iter().any(|(sid, _)| *sid == id)
    }
}

/// Dispatches host input to live subscribers, most recent first.
#[derive(Default)]
pub struct InputRouter {
    registry: Rc<RefCell<Registry>>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, sink: SinkRef) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = SubscriptionId(reg.next_id);
        reg.next_id += 1;
        reg.sinks.push((id, sink));
        log::debug!("Input subscription {id:?} acquired");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().sinks.len()
    }

    /// Offer `event` to subscribers, newest first, until one consumes it.
    pub fn dispatch(&self, event: &InputEvent) -> bool {
        let snapshot: Vec<(SubscriptionId, SinkRef)> = self
            .registry
            .borrow()
            .sinks
            .iter()
            .rev()
            .map(|(id, sink)| (*id, Rc::clone(sink)))
            .collect();

        for (id, sink) in snapshot {
            // A handler earlier in this dispatch may have dropped a guard.
            if !self.registry.borrow().contains(id) {
                continue;
            }
            let Ok(mut sink) = sink.try_borrow_mut() else {
                log::warn!("Skipping re-entrant dispatch to {id:?}");
                continue;
            };
            if sink.handle_input(event) {
                return true;
            }
        }
        false
    }
}

/// Guard for one subscription; unsubscribes on drop.
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|reg| reg.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().sinks.retain(|(sid, _)| *sid != self.id);
            log::debug!("Input subscription {:?} released", self.id);
        }
    }
}
