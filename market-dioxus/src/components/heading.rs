use dioxus::prelude::*;

#[component]
pub fn Heading(
    title: String,
    subtitle: Option<String>,
    #[props(default)] center: bool,
    icon: Option<Element>,
) -> Element {
    let class = if center { "heading heading-center" } else { "heading" };

    rsx! {
        div {
            class: "{class}",
            div {
                class: "heading-title",
                "{title}"
                if let Some(icon) = icon {
                    span { class: "heading-icon", {icon} }
                }
            }
            if let Some(subtitle) = subtitle {
                div { class: "heading-subtitle", "{subtitle}" }
            }
        }
    }
}
