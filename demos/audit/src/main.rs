//! audit — smallest end-to-end demo for the rust_ax attachment framework.
//!
//! A `RecordStore` owner fires `before_save` / `after_save` around every
//! write.  Two behavior units attach to it at runtime without the store
//! knowing either exists: an `AuditTrail` that records one line per event,
//! and a `QuotaGuard` that vetoes writes past a fixed quota by marking the
//! `before_save` event handled.  After detaching, further writes leave no
//! trace — the store is exactly as subscribable as before.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use ax_behavior::{Attachment, Behavior, BehaviorSet, Binding};
use ax_events::{Event, EventHandler, EventHub, EventSource, OwnerHandle};

// ── Constants ─────────────────────────────────────────────────────────────────

const BEFORE_SAVE: &str = "before_save";
const AFTER_SAVE:  &str = "after_save";

const SAVE_QUOTA: u32 = 3;

// ── Owner ─────────────────────────────────────────────────────────────────────

/// A toy keyed store that fires save-lifecycle events.
///
/// The store knows nothing about behaviors; it only exposes the
/// subscription capability and fires its two events.
#[derive(Default)]
struct RecordStore {
    events:  EventHub,
    records: Vec<(String, String)>,
}

impl RecordStore {
    /// Store `value` under `key`.  Returns `false` when a `before_save`
    /// handler vetoed the write.
    fn save(&mut self, key: &str, value: &str) -> bool {
        let payload = key.to_owned();

        let mut before = Event::with_data(BEFORE_SAVE, &payload);
        self.events.emit(&mut before);
        if before.handled {
            return false;
        }

        self.records.push((key.to_owned(), value.to_owned()));

        let mut after = Event::with_data(AFTER_SAVE, &payload);
        self.events.emit(&mut after);
        true
    }
}

impl EventSource for RecordStore {
    fn subscribe(&mut self, event: &str, handler: EventHandler) {
        self.events.subscribe(event, handler);
    }

    fn unsubscribe(&mut self, event: &str, handler: &EventHandler) {
        self.events.unsubscribe(event, handler);
    }
}

// ── Behaviors ─────────────────────────────────────────────────────────────────

/// Appends one line per save-lifecycle event it observes.
///
/// Both bindings go through the method table, so the handlers are resolved
/// and bound at attach time.
struct AuditTrail {
    attachment: Attachment,
    lines:      Rc<RefCell<Vec<String>>>,
}

impl AuditTrail {
    fn new() -> Self {
        Self { attachment: Attachment::new(), lines: Rc::new(RefCell::new(Vec::new())) }
    }

    fn log_handler(&self, verb: &'static str) -> EventHandler {
        let lines = Rc::clone(&self.lines);
        EventHandler::new(move |ev| {
            let key = ev.data_as::<String>().map_or("?", String::as_str);
            lines.borrow_mut().push(format!("{verb} {key}"));
        })
    }
}

impl Behavior for AuditTrail {
    fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    fn attachment_mut(&mut self) -> &mut Attachment {
        &mut self.attachment
    }

    fn events(&self) -> Vec<Binding> {
        vec![
            Binding::method(BEFORE_SAVE, "on_before_save"),
            Binding::method(AFTER_SAVE, "on_after_save"),
        ]
    }

    fn method(&self, name: &str) -> Option<EventHandler> {
        match name {
            "on_before_save" => Some(self.log_handler("saving")),
            "on_after_save" => Some(self.log_handler("saved ")),
            _ => None,
        }
    }
}

/// Vetoes saves past a fixed quota by marking `before_save` handled.
///
/// Declares a pre-built handler instead of a method name — the other
/// flavor of binding.
struct QuotaGuard {
    attachment: Attachment,
    allowed:    Rc<RefCell<u32>>,
    max:        u32,
}

impl QuotaGuard {
    fn new(max: u32) -> Self {
        Self { attachment: Attachment::new(), allowed: Rc::new(RefCell::new(0)), max }
    }
}

impl Behavior for QuotaGuard {
    fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    fn attachment_mut(&mut self) -> &mut Attachment {
        &mut self.attachment
    }

    fn events(&self) -> Vec<Binding> {
        let allowed = Rc::clone(&self.allowed);
        let max = self.max;
        vec![Binding::handler(
            BEFORE_SAVE,
            EventHandler::new(move |ev| {
                let mut allowed = allowed.borrow_mut();
                if *allowed >= max {
                    ev.handled = true;
                } else {
                    *allowed += 1;
                }
            }),
        )]
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== audit — rust_ax attachment demo ===");
    println!("Quota: {SAVE_QUOTA} writes while guarded");
    println!();

    // 1. Build the owner.  The store is shared so behaviors can hold a
    //    non-owning back-reference to it.
    let store = Rc::new(RefCell::new(RecordStore::default()));
    let handle: OwnerHandle = store.clone();

    // 2. Attach both behaviors through a named set.
    let audit = AuditTrail::new();
    let lines = Rc::clone(&audit.lines);
    let mut set = BehaviorSet::new(&handle);
    set.attach("audit", Box::new(audit))?;
    set.attach("quota", Box::new(QuotaGuard::new(SAVE_QUOTA)))?;
    println!("attached units: {}", set.names().collect::<Vec<_>>().join(", "));

    // 3. Save while guarded.  The fourth write trips the quota: the audit
    //    trail sees the attempt, the store never commits it.
    for (key, value) in [("alpha", "1"), ("beta", "2"), ("gamma", "3"), ("delta", "4")] {
        let ok = store.borrow_mut().save(key, value);
        println!("save {key:<6} -> {}", if ok { "committed" } else { "vetoed" });
    }

    // 4. Detach everything and save once more — unguarded and unaudited.
    set.detach_all();
    store.borrow_mut().save("epsilon", "5");
    println!();

    // 5. Summary.
    println!("audit trail ({} lines):", lines.borrow().len());
    for line in lines.borrow().iter() {
        println!("  {line}");
    }
    println!();
    println!("{:<10} {:<8}", "Key", "Value");
    println!("{}", "-".repeat(18));
    for (key, value) in &store.borrow().records {
        println!("{key:<10} {value:<8}");
    }

    Ok(())
}
