//! Informational dialog without footer actions.

use std::time::Duration;

use dioxus::prelude::*;

use super::header::ModalHeader;
use super::{dispatch, dispatch_key, ModalCallbacks};
use crate::components::ModalOverlay;
use crate::hooks::use_modal_controller;
use crate::modal::{ModalFlags, ModalInteraction, ModalPhase, ModalVariant, DEFAULT_CLOSE_DELAY_MS};

/// A dialog showing a title and custom body content.
///
/// Closes via the close button or a press on the backdrop; there is no
/// submit action and keyboard shortcuts are inert.
#[component]
pub fn BlankModal(
    is_open: bool,
    on_close: EventHandler<()>,
    title: Option<String>,
    body: Option<Element>,
    #[props(default)] disabled: bool,
    #[props(default = DEFAULT_CLOSE_DELAY_MS)] close_delay_ms: u64,
) -> Element {
    let flags = ModalFlags {
        disabled,
        ..ModalFlags::default()
    };
    let controller = use_modal_controller(ModalVariant::Blank, is_open, flags);

    let callbacks = ModalCallbacks {
        on_close,
        on_submit: None,
        secondary_action: None,
        close_delay: Duration::from_millis(close_delay_ms),
    };

    let phase = controller.phase();
    if phase == ModalPhase::Closed {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            closing: phase == ModalPhase::Closing,
            on_pointer_down: move |target| {
                dispatch(controller, ModalInteraction::PointerDown(target), callbacks);
            },
            on_keydown: move |evt: KeyboardEvent| dispatch_key(controller, &evt, callbacks),

            ModalHeader {
                title,
                on_close: move |()| {
                    dispatch(controller, ModalInteraction::CloseButton, callbacks);
                },
            }

            div {
                class: "modal-body",
                {body}
            }
        }
    }
}
