//! Dialog header: close button and optional title.

use dioxus::prelude::*;

use crate::components::icons::CloseIcon;

#[component]
pub fn ModalHeader(title: Option<String>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-header",

            button {
                class: "modal-close",
                r#type: "button",
                onclick: move |_| on_close.call(()),
                CloseIcon { size: 32 }
            }

            if let Some(title) = title {
                div {
                    class: "modal-title",
                    "{title}"
                }
            }
        }
    }
}
