//! A behavior unit with no declared events.

use crate::{Attachment, Behavior};

/// A [`Behavior`] that declares no event bindings.
///
/// Attaching it records the owner and nothing else.  Useful as a
/// placeholder in behavior sets and as a fixture in tests.
#[derive(Default)]
pub struct NoopBehavior {
    attachment: Attachment,
}

impl NoopBehavior {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for NoopBehavior {
    fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    fn attachment_mut(&mut self) -> &mut Attachment {
        &mut self.attachment
    }
}
