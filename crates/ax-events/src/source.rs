//! The capability an owner must expose to host attached handlers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::EventHandler;

/// Shared handle to a live owner.
pub type OwnerHandle = Rc<RefCell<dyn EventSource>>;

/// Non-owning back-reference to an owner.
///
/// Upgrading fails once the owner is dropped; holders never extend the
/// owner's lifetime.
pub type OwnerRef = Weak<RefCell<dyn EventSource>>;

/// The event-subscription capability consumed by attached units.
///
/// Implementors typically embed an [`EventHub`][crate::EventHub] and
/// delegate, but any storage works as long as the two contracts below hold.
pub trait EventSource {
    /// Register `handler` to be invoked when `event` fires.
    ///
    /// Must preserve registration order among handlers for the same event,
    /// and must accept duplicate registrations of distinct handlers without
    /// error.
    fn subscribe(&mut self, event: &str, handler: EventHandler);

    /// Remove the first registration identity-matching `handler`
    /// (see [`EventHandler::same`]).
    ///
    /// Must be a safe no-op when no registration matches.
    fn unsubscribe(&mut self, event: &str, handler: &EventHandler);
}
