//! Full-featured dialog with footer actions and keyboard shortcuts.

use std::time::Duration;

use dioxus::prelude::*;

use super::header::ModalHeader;
use super::{dispatch, dispatch_key, ModalCallbacks};
use crate::components::{Button, ModalOverlay};
use crate::hooks::use_modal_controller;
use crate::modal::{ModalFlags, ModalInteraction, ModalPhase, ModalVariant, DEFAULT_CLOSE_DELAY_MS};

/// A dialog with title, body, footer and primary/secondary actions.
///
/// `disabled` blocks every way of closing or submitting (use it while the
/// submit callback has a request in flight); `action_disabled` only greys
/// out the primary button. The secondary button is shown when both
/// `secondary_action_label` and `secondary_action` are given.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
    action_label: String,
    title: Option<String>,
    body: Option<Element>,
    footer: Option<Element>,
    #[props(default)] disabled: bool,
    #[props(default)] action_disabled: bool,
    secondary_action_label: Option<String>,
    secondary_action: Option<EventHandler<()>>,
    #[props(default = DEFAULT_CLOSE_DELAY_MS)] close_delay_ms: u64,
) -> Element {
    let secondary_label = secondary_action_label.filter(|_| secondary_action.is_some());
    let flags = ModalFlags {
        disabled,
        action_disabled,
        has_secondary_action: secondary_label.is_some(),
    };
    let controller = use_modal_controller(ModalVariant::Full, is_open, flags);

    let callbacks = ModalCallbacks {
        on_close,
        on_submit: Some(on_submit),
        secondary_action,
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

            div {
                class: "modal-footer",

                div {
                    class: "modal-actions",

                    if let Some(label) = secondary_label {
                        Button {
                            label,
                            outline: true,
                            disabled,
                            on_click: move |()| {
                                dispatch(controller, ModalInteraction::SecondaryButton, callbacks);
                            },
                        }
                    }

                    Button {
                        label: action_label,
                        disabled: disabled || action_disabled,
                        on_click: move |()| {
                            dispatch(controller, ModalInteraction::PrimaryButton, callbacks);
                        },
                    }
                }

                {footer}
            }
        }
    }
}
