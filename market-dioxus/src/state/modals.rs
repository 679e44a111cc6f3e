//! Which dialogs the application wants open.
//!
//! Each dialog's own visibility and close animation live in its component;
//! the registry only records the caller-side open intent.

use std::collections::BTreeSet;

use super::ModalKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    open: BTreeSet<ModalKind>,
}

impl ModalRegistry {
    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.open.contains(&kind)
    }

    pub fn open(&mut self, kind: ModalKind) {
        self.open.insert(kind);
    }

    pub fn close(&mut self, kind: ModalKind) {
        self.open.remove(&kind);
    }

    /// Replace whatever is open with `kind`.
    pub fn switch_to(&mut self, kind: ModalKind) {
        self.open.clear();
        self.open.insert(kind);
    }
}
