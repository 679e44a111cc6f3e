//! Modal keyboard shortcuts: Escape dismisses, Enter submits.

use dioxus::prelude::Key;

use crate::modal::ModalInteraction;

/// Map a key pressed inside a dialog to an interaction.
///
/// Escape closes whatever modifiers are held. Enter with modifiers is left
/// to the focused element (Shift+Enter in a text field, for instance).
#[must_use]
pub fn key_interaction(key: &Key, has_modifiers: bool) -> Option<ModalInteraction> {
    match key {
        Key::Escape => Some(ModalInteraction::EscapeKey),
        Key::Enter if !has_modifiers => Some(ModalInteraction::EnterKey),
        _ => None,
    }
}

/// Whether a multi-line input must keep Enter to itself instead of letting
/// it bubble up and submit the dialog.
#[must_use]
pub fn should_stop_enter(key: &Key, multiline: bool) -> bool {
    multiline && *key == Key::Enter
}
