//! Reusable modal overlay component.
//!
//! Encapsulates the backdrop + centered panel pattern shared by all dialogs.

use dioxus::prelude::*;

use crate::modal::PointerTarget;

/// Full-viewport backdrop with a centered panel.
///
/// Pointer-down on the backdrop reports [`PointerTarget::Backdrop`]; presses
/// inside the panel report [`PointerTarget::Content`] and are stopped from
/// reaching the backdrop. The overlay grabs keyboard focus on mount so
/// Escape and Enter are delivered to `on_keydown`.
#[component]
pub fn ModalOverlay(
    closing: bool,
    on_pointer_down: EventHandler<PointerTarget>,
    on_keydown: EventHandler<KeyboardEvent>,
    children: Element,
) -> Element {
    let panel_class = if closing {
        "modal-panel modal-panel-closing"
    } else {
        "modal-panel modal-panel-open"
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: 0,
            onmounted: move |evt| async move {
                if let Err(err) = evt.set_focus(true).await {
                    log::debug!("Modal overlay could not take focus: {err:?}");
                }
            },
            onmousedown: move |_| on_pointer_down.call(PointerTarget::Backdrop),
            onkeydown: move |evt| on_keydown.call(evt),

            div {
                class: "{panel_class}",
                onmousedown: move |evt| {
                    evt.stop_propagation();
                    on_pointer_down.call(PointerTarget::Content);
                },
                {children}
            }
        }
    }
}
