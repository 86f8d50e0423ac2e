//! Declared event bindings — what a unit wants registered, before resolution.

use ax_events::{Event, EventHandler};

/// How a declared binding finds its callable at attach time.
pub enum HandlerSpec {
    /// Name of an entry in the unit's own method table
    /// ([`Behavior::method`][crate::Behavior::method]).
    ///
    /// Resolved once per attach; the resolved value is recorded so teardown
    /// can hand the owner the exact handler it was given.
    Method(&'static str),

    /// An already-concrete handler, registered as-is.
    Handler(EventHandler),
}

/// One entry of a unit's declared event map: event name plus handler spec.
pub struct Binding {
    pub event: String,
    pub spec:  HandlerSpec,
}

impl Binding {
    /// Bind `event` to the unit method named `method`.
    pub fn method(event: impl Into<String>, method: &'static str) -> Self {
        Self { event: event.into(), spec: HandlerSpec::Method(method) }
    }

    /// Bind `event` to a pre-built handler.
    pub fn handler(event: impl Into<String>, handler: EventHandler) -> Self {
        Self { event: event.into(), spec: HandlerSpec::Handler(handler) }
    }

    /// Bind `event` to a free closure.
    ///
    /// Shorthand for `Binding::handler(event, EventHandler::new(f))`.
    pub fn closure(event: impl Into<String>, f: impl Fn(&mut Event<'_>) + 'static) -> Self {
        Self::handler(event, EventHandler::new(f))
    }
}
