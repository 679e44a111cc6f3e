//! Custom Dioxus hooks for marketplace components.

use dioxus::prelude::*;

use crate::modal::{ControllerCell, ModalController, ModalFlags, ModalPhase, ModalVariant};
use crate::state::AppSnapshot;

/// Read the current application snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> AppSnapshot {
    use_context::<Signal<AppSnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after processing commands).
#[must_use]
pub fn use_snapshot_signal() -> Signal<AppSnapshot> {
    use_context::<Signal<AppSnapshot>>()
}

/// Component-local modal controller.
///
/// The controller itself is not reactive: it lives in a [`CopyValue`] and a
/// separate revision signal re-renders the dialog when an interaction or a
/// finished close delay changes it.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    controller: CopyValue<ModalController>,
    revision: Signal<u64>,
}

impl ModalHandle {
    /// Current phase; subscribes the calling component to changes.
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        let _ = self.revision.read();
        self.controller.read().phase()
    }
}

impl ControllerCell for ModalHandle {
    fn update<R>(&self, f: impl FnOnce(&mut ModalController) -> R) -> R {
        let mut controller = self.controller;
        let mut modal = controller.write();
        f(&mut modal)
    }

    fn changed(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

/// Modal controller mirroring the caller's props.
///
/// `is_open` and the flags are applied while rendering, so the render that
/// first sees `is_open = true` already gets [`ModalPhase::Open`]. Only the
/// edges of `is_open` matter. Unmounting drops any pending close without
/// notifying.
#[must_use]
pub fn use_modal_controller(variant: ModalVariant, is_open: bool, flags: ModalFlags) -> ModalHandle {
    let handle = use_hook(|| ModalHandle {
        controller: CopyValue::new(ModalController::new(variant, false)),
        revision: Signal::new(0),
    });
    handle.update(|modal| modal.sync(is_open, flags));

    // The close task dies with the scope; forget its ticket too
    use_drop(move || {
        let mut controller = handle.controller;
        if let Ok(mut modal) = controller.try_write() {
            if modal.cancel_pending_close() {
                log::debug!("dialog unmounted during close delay, on_close dropped");
            }
        };
    });

    handle
}
