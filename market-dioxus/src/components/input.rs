//! Labelled form input with inline validation message.

use dioxus::prelude::*;

use crate::keybindings::should_stop_enter;

#[component]
pub fn TextInput(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] multiline: bool,
    error: Option<String>,
) -> Element {
    let field_class = if error.is_some() {
        "form-field form-field-error"
    } else {
        "form-field"
    };

    rsx! {
        div {
            class: "{field_class}",

            if multiline {
                textarea {
                    id: "{id}",
                    placeholder: " ",
                    disabled,
                    required,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                    onkeydown: move |evt| {
                        if should_stop_enter(&evt.key(), multiline) {
                            evt.stop_propagation();
                        }
                    },
                }
            } else {
                input {
                    id: "{id}",
                    r#type: "{input_type}",
                    placeholder: " ",
                    disabled,
                    required,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }

            label {
                r#for: "{id}",
                "{label}"
            }

            if let Some(error) = error {
                div { class: "form-error", "{error}" }
            }
        }
    }
}
