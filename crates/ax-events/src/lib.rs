//! `ax-events` — event dispatch primitives for the `rust_ax` framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`event`]   | `Event<'a>` — the value handlers receive on a fire       |
//! | [`handler`] | `EventHandler` — identity-preserving cloneable callable  |
//! | [`source`]  | `EventSource` trait, `OwnerHandle` / `OwnerRef` aliases  |
//! | [`hub`]     | `EventHub` — ordered per-event registry with `emit`      |
//!
//! # Design notes
//!
//! Everything here is synchronous and thread-confined.  Handlers are `Rc`
//! values whose identity survives cloning, and owners are shared as
//! `Rc<RefCell<dyn EventSource>>` handles with `Weak` back-references held
//! by whoever subscribed.  Registration order is an explicit `Vec` per event
//! name, so same-event handlers always fire in the order they were
//! subscribed — there is no reflection and no unordered property bag.

pub mod event;
pub mod handler;
pub mod hub;
pub mod source;


pub use event::Event;
pub use handler::EventHandler;
pub use hub::EventHub;
pub use source::{EventSource, OwnerHandle, OwnerRef};
