//! Account registration dialog.

use dioxus::prelude::*;

use super::ProviderButtons;
use crate::components::icons::WaveIcon;
use crate::components::{Heading, Modal, TextInput};
use crate::forms::RegisterField;
use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::state::{AppCommand, ModalKind};
use crate::AppState;

const PRIVACY_POLICY_PATH: &str = "/about/privacy-policy";

/// Registration form in a full modal.
///
/// The dialog is disabled while the request is in flight, so it can be
/// neither dismissed nor resubmitted until the API answers.
#[component]
pub fn RegisterModal() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();
    let snapshot = use_snapshot();

    let send = use_callback(move |cmd: AppCommand| {
        app_state.dispatch(cmd, &mut snapshot_signal);
    });

    let register = snapshot.register;
    let loading = register.loading;

    let body = rsx! {
        div {
            class: "register-body",

            Heading {
                title: "Welcome to MTSA marketplace",
                subtitle: "Please register to continue",
                center: true,
                icon: rsx! { WaveIcon { size: 24 } },
            }

            for field in RegisterField::ALL {
                TextInput {
                    key: "{field:?}",
                    id: field.id().to_string(),
                    label: field.label().to_string(),
                    input_type: field.input_type().to_string(),
                    value: register.value(field).to_string(),
                    disabled: loading,
                    required: true,
                    error: register.error(field).map(str::to_string),
                    on_input: move |value| send.call(AppCommand::RegisterInput { field, value }),
                }
            }
        }
    };

    let footer = rsx! {
        div {
            class: "register-footer",
            hr {}

            ProviderButtons { send }

            div {
                class: "auth-toggle",
                div { "Already have an account?" }
                div {
                    class: "auth-toggle-link",
                    onclick: move |_| send.call(AppCommand::SwitchModal(ModalKind::Login)),
                    "Login"
                }
            }

            div {
                class: "register-privacy",
                a {
                    href: PRIVACY_POLICY_PATH,
                    onclick: move |evt| {
                        evt.prevent_default();
                        send.call(AppCommand::Navigate(PRIVACY_POLICY_PATH.to_string()));
                    },
                    "View our Privacy Policy"
                }
            }
        }
    };

    rsx! {
        Modal {
            is_open: register.is_open,
            disabled: loading,
            title: "Register",
            action_label: "Register",
            body,
            footer,
            close_delay_ms: snapshot.close_delay_ms,
            on_close: move |()| send.call(AppCommand::CloseModal(ModalKind::Register)),
            on_submit: move |()| send.call(AppCommand::RegisterSubmit),
        }
    }
}
