//! Main application component.
//!
//! This is the root Dioxus component that composes the marketplace UI.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{ItemOwner, LoginModal, Navbar, NotificationContainer, RegisterModal};
use crate::state::{AppCommand, AppSnapshot};
use crate::AppState;

/// Interval at which results of background requests are picked up.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();

    // Snapshot signal shared with every component through the context
    let mut snapshot_signal = use_context_provider({
        let app_state = app_state.clone();
        move || Signal::new(app_state.get_snapshot())
    });

    // Background API calls report back through the command channel
    use_future({
        let app_state = app_state.clone();
        move || {
            let app_state = app_state.clone();
            async move {
                loop {
                    tokio::time::sleep(POLL_INTERVAL).await;
                    app_state.process_and_notify(&mut snapshot_signal);
                }
            }
        }
    });

    // Hand navigation requests (sign-in providers, plain links) to the webview
    use_effect({
        let app_state = app_state.clone();
        move || {
            let target = snapshot_signal.read().pending_navigation.clone();
            if let Some(url) = target {
                log::info!("Navigating to {url}");
                match serde_json::to_string(&url) {
                    Ok(js_url) => {
                        document::eval(&format!("window.open({js_url}, '_blank');"));
                    }
                    Err(err) => log::error!("Cannot encode navigation target: {err}"),
                }
                app_state.dispatch(AppCommand::NavigationHandled, &mut snapshot_signal);
            }
        }
    });

    let snapshot: AppSnapshot = snapshot_signal.read().clone();

    rsx! {
        document::Title { "MTSA Marketplace" }

        div {
            class: "app-container",

            Navbar {}

            main {
                class: "page",

                if let Some(user) = snapshot.current_user.clone() {
                    ItemOwner {
                        user: user.clone(),
                        current_user: user,
                        heading: "Your contact details",
                        profile: true,
                        saving: snapshot.contact_saving,
                        on_update_user: {
                            let app_state = app_state.clone();
                            move |update| {
                                app_state.dispatch(AppCommand::ContactSubmit(update), &mut snapshot_signal);
                            }
                        },
                    }
                } else {
                    div {
                        class: "page-empty",
                        "Sign up or log in to manage your listings."
                    }
                }
            }

            RegisterModal {}
            LoginModal {}

            NotificationContainer { notifications: snapshot.notifications.clone() }
        }
    }
}
