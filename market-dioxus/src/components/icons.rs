//! Inline SVG icons.

use dioxus::prelude::*;

/// Outline icon frame shared by the stroke-based icons below.
#[component]
fn StrokeIcon(size: u32, children: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn CloseIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}

#[component]
pub fn PhoneIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

#[component]
pub fn MailIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            polyline { points: "22 6 12 13 2 6" }
        }
    }
}

#[component]
pub fn HouseIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            path { d: "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn CalendarIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            line { x1: "16", y1: "2", x2: "16", y2: "6" }
            line { x1: "8", y1: "2", x2: "8", y2: "6" }
            line { x1: "3", y1: "10", x2: "21", y2: "10" }
        }
    }
}

#[component]
pub fn WaveIcon(size: u32) -> Element {
    rsx! {
        StrokeIcon { size,
            path { d: "M18 11V6a2 2 0 0 0-4 0v5" }
            path { d: "M14 10V4a2 2 0 0 0-4 0v6" }
            path { d: "M10 10.5V6a2 2 0 0 0-4 0v8" }
            path { d: "M18 8a2 2 0 1 1 4 0v6a8 8 0 0 1-8 8h-2c-2.8 0-4.5-.86-5.99-2.34l-3.6-3.6a2 2 0 0 1 2.83-2.82L7 15" }
        }
    }
}

/// Brand mark for a sign-in provider (single-letter badge).
#[component]
pub fn ProviderIcon(provider: crate::auth::AuthProvider) -> Element {
    let (class, letter) = match provider {
        crate::auth::AuthProvider::Facebook => ("provider-icon provider-facebook", "f"),
        crate::auth::AuthProvider::Google => ("provider-icon provider-google", "G"),
        crate::auth::AuthProvider::Github => ("provider-icon provider-github", "gh"),
    };
    rsx! {
        span { class: "{class}", "{letter}" }
    }
}
