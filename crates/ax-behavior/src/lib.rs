//! `ax-behavior` — attachable behavior units for the `rust_ax` framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`binding`]    | `Binding`, `HandlerSpec` — declared event map entries  |
//! | [`attachment`] | `Attachment` — owner ref + registration record         |
//! | [`behavior`]   | `Behavior` trait — attach/detach lifecycle             |
//! | [`set`]        | `BehaviorSet` — named units bound to one owner         |
//! | [`noop`]       | `NoopBehavior` — unit with no bindings                 |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                   |
//!
//! # Design notes
//!
//! The attach/detach pair is deliberately asymmetric in where truth lives.
//! `attach` derives registrations from the unit's declared event map;
//! `detach` replays the *recorded* registrations back at the owner.  Handler
//! identity is carried by `Rc` allocation (`EventHandler::same`), so only
//! the recorded values — not freshly re-resolved ones — can be matched and
//! removed by the owner.  The registration record is therefore the single
//! authoritative teardown source, and a unit whose `events()` result drifts
//! between attach and detach still tears down exactly what it registered.

pub mod attachment;
pub mod behavior;
pub mod binding;
pub mod error;
pub mod noop;
pub mod set;


pub use attachment::Attachment;
pub use behavior::Behavior;
pub use binding::{Binding, HandlerSpec};
pub use error::{BehaviorError, BehaviorResult};
pub use noop::NoopBehavior;
pub use set::BehaviorSet;
