//! The `Event` value passed to every handler when an owner fires.

use std::any::Any;

/// A fired event, borrowed for the duration of one dispatch.
///
/// Handlers receive `&mut Event` so they can set
/// [`handled`][Self::handled] and stop propagation to later-registered
/// handlers.  The optional payload is borrowed from the emitter; handlers
/// recover it with [`data_as`][Self::data_as].
pub struct Event<'a> {
    /// Name the owner fired, e.g. `"before_save"`.
    pub name: &'a str,

    /// When a handler sets this, dispatch stops before later handlers run.
    /// Emitters may also read it after the fire (e.g. to veto a write).
    pub handled: bool,

    data: Option<&'a dyn Any>,
}

impl<'a> Event<'a> {
    /// An event with no payload.
    pub fn new(name: &'a str) -> Self {
        Self { name, handled: false, data: None }
    }

    /// An event carrying a payload the emitter wants handlers to see.
    pub fn with_data(name: &'a str, data: &'a dyn Any) -> Self {
        Self { name, handled: false, data: Some(data) }
    }

    /// Downcast the payload to `T`.
    ///
    /// `None` when the event carries no payload or the payload is a
    /// different type.
    pub fn data_as<T: 'static>(&self) -> Option<&'a T> {
        self.data?.downcast_ref::<T>()
    }
}
