//! Sign-in dialog offering the external providers.

use dioxus::prelude::*;

use super::ProviderButtons;
use crate::components::{BlankModal, Heading};
use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::state::{AppCommand, ModalKind};
use crate::AppState;

#[component]
pub fn LoginModal() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();
    let snapshot = use_snapshot();

    let send = use_callback(move |cmd: AppCommand| {
        app_state.dispatch(cmd, &mut snapshot_signal);
    });

    let body = rsx! {
        div {
            class: "login-body",

            Heading {
                title: "Welcome back",
                subtitle: "Log in to your account",
                center: true,
            }

            ProviderButtons { send }

            div {
                class: "auth-toggle",
                div { "First time using MTSA marketplace?" }
                div {
                    class: "auth-toggle-link",
                    onclick: move |_| send.call(AppCommand::SwitchModal(ModalKind::Register)),
                    "Create an account"
                }
            }
        }
    };

    rsx! {
        BlankModal {
            is_open: snapshot.login_open,
            title: "Login",
            body,
            close_delay_ms: snapshot.close_delay_ms,
            on_close: move |()| send.call(AppCommand::CloseModal(ModalKind::Login)),
        }
    }
}
