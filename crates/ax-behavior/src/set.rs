//! `BehaviorSet` — a named collection of units bound to one owner.

use std::rc::Rc;

use ax_events::OwnerHandle;

use crate::{Behavior, BehaviorResult};

/// Ordered, name-keyed collection of boxed units attached to a single owner.
///
/// The set attaches units as they are inserted and guarantees teardown: a
/// replaced or removed unit is detached before it leaves the set, and
/// dropping the set detaches everything still attached.  Names are unique;
/// insertion order is preserved for iteration.
pub struct BehaviorSet {
    owner:   OwnerHandle,
    entries: Vec<(String, Box<dyn Behavior>)>,
}

impl BehaviorSet {
    /// An empty set bound to `owner`.
    pub fn new(owner: &OwnerHandle) -> Self {
        Self { owner: Rc::clone(owner), entries: Vec::new() }
    }

    /// Attach `unit` to the set's owner and store it under `name`.
    ///
    /// A unit already stored under `name` is detached first and replaced in
    /// place.  If attaching the new unit fails, it is detached again (which
    /// clears any partial registrations), the name is vacated, and the
    /// error is returned.
    pub fn attach(&mut self, name: impl Into<String>, mut unit: Box<dyn Behavior>) -> BehaviorResult<()> {
        let name = name.into();
        let slot = self.entries.iter().position(|(n, _)| *n == name);
        if let Some(i) = slot {
            self.entries[i].1.detach();
        }

        if let Err(e) = unit.attach(&self.owner) {
            unit.detach();
            if let Some(i) = slot {
                self.entries.remove(i);
            }
            return Err(e);
        }

        match slot {
            Some(i) => self.entries[i].1 = unit,
            None => self.entries.push((name, unit)),
        }
        Ok(())
    }

    /// Detach and return the unit stored under `name`, if any.
    pub fn detach(&mut self, name: &str) -> Option<Box<dyn Behavior>> {
        let i = self.entries.iter().position(|(n, _)| n == name)?;
        let (_, mut unit) = self.entries.remove(i);
        unit.detach();
        Some(unit)
    }

    /// Detach every unit, leaving the set empty.
    pub fn detach_all(&mut self) {
        for (_, unit) in &mut self.entries {
            unit.detach();
        }
        self.entries.clear();
    }

    /// Shared view of the unit stored under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn Behavior> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, u)| u.as_ref())
    }

    /// Mutable view of the unit stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Behavior + '_)> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, u)| u.as_mut())
    }

    /// Unit names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for BehaviorSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}
