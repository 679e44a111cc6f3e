//! Top navigation bar.

use dioxus::prelude::*;

use crate::components::{Avatar, Logo};
use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::state::{AppCommand, ModalKind};
use crate::AppState;

#[component]
pub fn Navbar() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();
    let snapshot = use_snapshot();

    let open_modal = move |kind: ModalKind| {
        let app_state = app_state.clone();
        move |_| app_state.dispatch(AppCommand::OpenModal(kind), &mut snapshot_signal)
    };

    rsx! {
        nav {
            class: "navbar",

            Logo {}

            div {
                class: "navbar-menu",

                if let Some(user) = snapshot.current_user {
                    div {
                        class: "navbar-user",
                        Avatar { src: user.image.clone() }
                        span { {user.name.clone().unwrap_or_default()} }
                    }
                } else {
                    button {
                        class: "navbar-item",
                        onclick: open_modal(ModalKind::Login),
                        "Login"
                    }
                    button {
                        class: "navbar-item",
                        onclick: open_modal(ModalKind::Register),
                        "Sign up"
                    }
                }
            }
        }
    }
}
