//! Per-unit attachment state: owner back-reference and registration record.

use ax_events::{EventHandler, OwnerHandle, OwnerRef};

/// The lifecycle state every behavior unit embeds.
///
/// `Attachment` is dumb storage: the transitions live in the
/// [`Behavior`][crate::Behavior] default methods.  The mutating helpers are
/// public so that units overriding `attach`/`detach` can keep the same
/// bookkeeping, which the lifecycle contract requires of them.
#[derive(Default)]
pub struct Attachment {
    owner:      Option<OwnerRef>,
    registered: Vec<(String, EventHandler)>,
}

impl Attachment {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` between a successful `attach` and the next `detach`, including
    /// the window where the owner has been dropped but `detach` has not yet
    /// run.
    pub fn is_attached(&self) -> bool {
        self.owner.is_some()
    }

    /// Upgraded handle to the current owner.
    ///
    /// `None` when detached, and also while attached if the owner has
    /// already been dropped.
    pub fn owner(&self) -> Option<OwnerHandle> {
        self.owner.as_ref()?.upgrade()
    }

    /// The (event, handler) pairs registered with the current owner, in
    /// registration order.  This is the authoritative teardown record.
    pub fn registered(&self) -> &[(String, EventHandler)] {
        &self.registered
    }

    // ── Transitions (for `attach`/`detach` implementations) ───────────────

    /// Record the owner back-reference.
    pub fn set_owner(&mut self, owner: OwnerRef) {
        self.owner = Some(owner);
    }

    /// Append one registration to the teardown record.
    pub fn record(&mut self, event: String, handler: EventHandler) {
        self.registered.push((event, handler));
    }

    /// Reset to the detached state, returning the previous owner reference
    /// and the registration record so `detach` can replay it.
    pub fn take(&mut self) -> (Option<OwnerRef>, Vec<(String, EventHandler)>) {
        (self.owner.take(), std::mem::take(&mut self.registered))
    }
}
