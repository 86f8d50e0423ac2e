//! The `Behavior` trait — the main extension point for user code.

use std::rc::Rc;

use ax_events::{EventHandler, OwnerHandle};

use crate::{Attachment, BehaviorError, BehaviorResult, Binding, HandlerSpec};

/// An attachable extension unit.
///
/// Implementors embed an [`Attachment`] and expose it through the two
/// accessors; everything else has a default.  A minimal unit:
///
/// ```rust,ignore
/// struct AuditTrail {
///     attachment: Attachment,
///     entries:    Rc<RefCell<Vec<String>>>,
/// }
///
/// impl Behavior for AuditTrail {
///     fn attachment(&self) -> &Attachment { &self.attachment }
///     fn attachment_mut(&mut self) -> &mut Attachment { &mut self.attachment }
///
///     fn events(&self) -> Vec<Binding> {
///         vec![Binding::method("before_save", "on_before_save")]
///     }
///
///     fn method(&self, name: &str) -> Option<EventHandler> {
///         match name {
///             "on_before_save" => {
///                 let entries = Rc::clone(&self.entries);
///                 Some(EventHandler::new(move |ev| {
///                     entries.borrow_mut().push(ev.name.to_owned());
///                 }))
///             }
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// # Lifecycle
///
/// A unit is either *detached* (no owner, no registrations) or *attached*
/// (owner recorded, declared handlers registered with it).  The only
/// transitions are [`attach`][Self::attach] and [`detach`][Self::detach].
/// The unit never owns its owner — the back-reference is weak, so a dropped
/// owner simply makes the eventual `detach` skip its unsubscribe loop.
///
/// # Overriding `attach`/`detach`
///
/// Both defaults do all required bookkeeping.  Overrides are allowed, but
/// must preserve the contract: record the owner, register exactly the
/// resolved handlers, and tear down from the recorded pairs — never from a
/// fresh `events()` call, which would mint handlers the owner has never
/// seen.  The [`Attachment`] transition helpers exist for this purpose.
///
/// # Threading
///
/// `attach` and `detach` on one unit must be serialized by the caller; the
/// whole object graph (`Rc`, `RefCell`) is thread-confined.
pub trait Behavior {
    /// Read access to the unit's attachment state.
    fn attachment(&self) -> &Attachment;

    /// Mutable access to the unit's attachment state.
    fn attachment_mut(&mut self) -> &mut Attachment;

    /// The unit's declared event map, in registration order.
    ///
    /// Pure declaration, default empty.  Recomputed on every call; the base
    /// `attach` calls it exactly once per invocation and never caches the
    /// result beyond that invocation.
    fn events(&self) -> Vec<Binding> {
        Vec::new()
    }

    /// Resolve a [`HandlerSpec::Method`] name to a concrete handler.
    ///
    /// The returned handler outlives the `&self` borrow, so it should
    /// capture (via `Rc`) whatever unit state it needs when the owner fires.
    /// Returning `None` for a name that `events()` declared makes `attach`
    /// fail with [`BehaviorError::UnresolvedHandler`].  Default: resolves
    /// nothing.
    fn method(&self, _name: &str) -> Option<EventHandler> {
        None
    }

    /// `true` between a successful `attach` and the next `detach`.
    fn is_attached(&self) -> bool {
        self.attachment().is_attached()
    }

    /// Upgraded handle to the current owner, for inspection.
    ///
    /// `None` when detached, and also while attached if the owner has been
    /// dropped.
    fn owner(&self) -> Option<OwnerHandle> {
        self.attachment().owner()
    }

    /// Attach this unit to `owner`: record the back-reference, resolve every
    /// declared binding, and subscribe the resolved handlers in declaration
    /// order.  No handler is invoked during attach.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::AlreadyAttached`] if an owner is already recorded —
    /// including one that has since been dropped; `detach` first.
    ///
    /// [`BehaviorError::UnresolvedHandler`] if a declared method name does
    /// not resolve.  Attach is not atomic: bindings before the failing one
    /// stay registered and the unit stays attached.  Recover with `detach`.
    fn attach(&mut self, owner: &OwnerHandle) -> BehaviorResult<()> {
        if self.attachment().is_attached() {
            return Err(BehaviorError::AlreadyAttached);
        }
        self.attachment_mut().set_owner(Rc::downgrade(owner));

        for Binding { event, spec } in self.events() {
            let handler = match spec {
                HandlerSpec::Method(name) => self.method(name).ok_or_else(|| {
                    BehaviorError::UnresolvedHandler { event: event.clone(), method: name }
                })?,
                HandlerSpec::Handler(handler) => handler,
            };
            owner.borrow_mut().subscribe(&event, handler.clone());
            self.attachment_mut().record(event, handler);
        }
        Ok(())
    }

    /// Detach from the current owner, unsubscribing exactly the handlers
    /// recorded at attach time.  Idempotent; never fails.
    ///
    /// Teardown replays the recorded handler values rather than re-resolving
    /// the event map — a re-resolved method handler would be a fresh
    /// allocation the owner's identity check cannot match.
    fn detach(&mut self) {
        let (owner, registered) = self.attachment_mut().take();
        let Some(owner) = owner else { return };
        let Some(owner) = owner.upgrade() else { return };

        let mut owner = owner.borrow_mut();
        for (event, handler) in &registered {
            owner.unsubscribe(event, handler);
        }
    }
}
