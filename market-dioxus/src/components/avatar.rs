use dioxus::prelude::*;

/// User picture, or a neutral silhouette when the user has none.
#[component]
pub fn Avatar(src: Option<String>) -> Element {
    match src {
        Some(src) => rsx! {
            img {
                class: "avatar",
                alt: "Avatar",
                height: "30",
                width: "30",
                src: "{src}",
            }
        },
        None => rsx! {
            svg {
                class: "avatar",
                xmlns: "http://www.w3.org/2000/svg",
                width: "30",
                height: "30",
                view_box: "0 0 30 30",
                role: "img",
                circle { cx: "15", cy: "15", r: "15", fill: "#d4d4d4" }
                circle { cx: "15", cy: "12", r: "5", fill: "#fafafa" }
                path { d: "M6 25.5a9 9 0 0 1 18 0", fill: "#fafafa" }
            }
        },
    }
}
