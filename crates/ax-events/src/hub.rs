//! `EventHub` — ordered per-event handler registry with synchronous dispatch.
//!
//! # Why an explicit list
//!
//! Subscribers rely on same-event handlers firing in registration order.
//! `EventHub` keeps one `Vec<EventHandler>` per event name, so that order
//! is the storage order — no reflection, no unordered property bag.

use rustc_hash::FxHashMap;

use crate::{Event, EventHandler, EventSource};

/// A registry mapping event names to their handlers, in registration order.
///
/// Owners embed an `EventHub` and call [`emit`][EventHub::emit] at their
/// lifecycle points, or implement [`EventSource`] some other way — nothing
/// outside this crate depends on the hub specifically.
#[derive(Default)]
pub struct EventHub {
    handlers: FxHashMap<String, Vec<EventHandler>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if at least one handler is registered for `event`.
    pub fn has_handlers(&self, event: &str) -> bool {
        self.handlers.get(event).is_some_and(|list| !list.is_empty())
    }

    /// Number of handlers currently registered for `event`.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    /// Invoke every handler registered for `event.name`, in registration
    /// order, stopping early once a handler sets `event.handled`.
    ///
    /// The handler list is snapshotted (cheap `Rc` clones) before dispatch,
    /// so the fire observes the registrations as of emit time.
    pub fn emit(&self, event: &mut Event<'_>) {
        let Some(list) = self.handlers.get(event.name) else {
            return;
        };
        let snapshot = list.clone();
        for handler in &snapshot {
            if event.handled {
                break;
            }
            handler.call(event);
        }
    }
}

impl EventSource for EventHub {
    fn subscribe(&mut self, event: &str, handler: EventHandler) {
        self.handlers.entry(event.to_owned()).or_default().push(handler);
    }

    fn unsubscribe(&mut self, event: &str, handler: &EventHandler) {
        let Some(list) = self.handlers.get_mut(event) else {
            return;
        };
        if let Some(i) = list.iter().position(|h| h.same(handler)) {
            list.remove(i);
        }
    }
}
