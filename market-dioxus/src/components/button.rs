//! Action button used by dialogs and forms.

use dioxus::prelude::*;

#[component]
pub fn Button(
    label: String,
    on_click: EventHandler<()>,
    #[props(default)] disabled: bool,
    #[props(default)] outline: bool,
    icon: Option<Element>,
) -> Element {
    let mut class = String::from("btn");
    if outline {
        class.push_str(" btn-outline");
    }

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled,
            onclick: move |evt| {
                evt.stop_propagation();
                on_click.call(());
            },
            if let Some(icon) = icon {
                span { class: "btn-icon", {icon} }
            }
            "{label}"
        }
    }
}
