//! `EventHandler` — an identity-preserving, cloneable callable.
//!
//! # Why identity matters
//!
//! An owner's `unsubscribe` must recognize "the handler registered earlier"
//! by the exact value it was given at subscribe time.  Closures have no
//! useful structural equality, so identity lives in the allocation: cloning
//! an `EventHandler` clones an `Rc`, and [`same`][EventHandler::same]
//! compares the underlying pointers.  Two handlers built from identical
//! closures are distinct; clones of one handler are the same.

use std::fmt;
use std::rc::Rc;

use crate::Event;

/// A shared event callback whose identity survives cloning.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut Event<'_>)>);

impl EventHandler {
    /// Wrap a closure.  Each call mints a new identity.
    pub fn new(f: impl Fn(&mut Event<'_>) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// `true` if `self` and `other` are clones of the same handler.
    #[inline]
    pub fn same(&self, other: &EventHandler) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Invoke the handler.
    #[inline]
    pub fn call(&self, event: &mut Event<'_>) {
        (self.0)(event)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0))
    }
}
