//! Navbar logo linking back to the home page.

use dioxus::prelude::*;

use crate::hooks::use_snapshot_signal;
use crate::state::AppCommand;
use crate::AppState;

const HOME_PATH: &str = "/";

/// Marketplace wordmark, 260×65, drawn inline so no image file is needed.
#[component]
pub fn Logo() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    rsx! {
        a {
            href: HOME_PATH,
            aria_label: "MTSA marketplace home",
            onclick: move |evt| {
                evt.prevent_default();
                app_state.dispatch(AppCommand::Navigate(HOME_PATH.to_string()), &mut snapshot_signal);
            },
            svg {
                class: "logo",
                xmlns: "http://www.w3.org/2000/svg",
                width: "260",
                height: "65",
                view_box: "0 0 260 65",
                rect { x: "4", y: "12", width: "41", height: "41", rx: "10", fill: "#f43f5e" }
                path {
                    d: "M14 42V24l10.5 10L35 24v18",
                    fill: "none",
                    stroke: "#fff",
                    stroke_width: "4",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
                text {
                    x: "56",
                    y: "42",
                    font_family: "system-ui, sans-serif",
                    font_size: "24",
                    font_weight: "700",
                    fill: "#171717",
                    "MTSA marketplace"
                }
            }
        }
    }
}
