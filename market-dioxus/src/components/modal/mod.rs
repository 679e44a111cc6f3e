//! Generic dialog shells.
//!
//! [`Modal`] is the full-featured dialog (title, body, footer, primary and
//! secondary actions, Escape/Enter shortcuts). [`BlankModal`] shows only a
//! title and body and closes via the backdrop or close button.
//!
//! Both delegate every decision to a component-local
//! [`ModalController`](crate::modal::ModalController) driven through
//! [`drive`]; the close delay runs as a task scoped to the dialog, so
//! unmounting it cancels `on_close`.

mod blank;
mod full;
mod header;

pub use blank::BlankModal;
pub use full::Modal;

use std::time::Duration;

use dioxus::prelude::*;

use crate::hooks::ModalHandle;
use crate::keybindings::key_interaction;
use crate::modal::{drive, ModalActions, ModalEffect, ModalInteraction};

/// Callbacks a dialog shell forwards effects to.
#[derive(Clone, Copy)]
pub(crate) struct ModalCallbacks {
    pub on_close: EventHandler<()>,
    pub on_submit: Option<EventHandler<()>>,
    pub secondary_action: Option<EventHandler<()>>,
    pub close_delay: Duration,
}

impl ModalActions for ModalCallbacks {
    fn close(&self) {
        self.on_close.call(());
    }

    fn submit(&self) {
        if let Some(on_submit) = self.on_submit {
            on_submit.call(());
        }
    }

    fn secondary(&self) {
        if let Some(secondary) = self.secondary_action {
            secondary.call(());
        }
    }
}

/// Feed an interaction to the dialog and carry out the resulting effect.
///
/// The delayed close runs as a task of the dialog's scope.
pub(crate) fn dispatch(
    handle: ModalHandle,
    interaction: ModalInteraction,
    callbacks: ModalCallbacks,
) -> ModalEffect {
    let (effect, close_task) = drive(&handle, interaction, &callbacks, callbacks.close_delay);
    log::trace!("modal interaction {interaction:?} -> {effect:?}");
    if let Some(close_task) = close_task {
        spawn(close_task);
    }
    effect
}

/// Keyboard handler shared by both shells.
pub(crate) fn dispatch_key(handle: ModalHandle, evt: &KeyboardEvent, callbacks: ModalCallbacks) {
    let has_modifiers = {
        let mods = evt.modifiers();
        mods.shift() || mods.ctrl() || mods.alt() || mods.meta()
    };
    if let Some(interaction) = key_interaction(&evt.key(), has_modifiers) {
        if dispatch(handle, interaction, callbacks) != ModalEffect::None {
            evt.prevent_default();
        }
    }
}
