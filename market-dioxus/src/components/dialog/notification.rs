//! Notification toast component.
//!
//! Displays toast notifications in the bottom-right corner of the window.

use dioxus::prelude::*;

use crate::components::icons::CloseIcon;
use crate::hooks::use_snapshot_signal;
use crate::state::{AppCommand, NotificationSeverity, NotificationSnapshot};
use crate::AppState;

/// Container for notification toasts, newest on top.
#[component]
pub fn NotificationContainer(notifications: Vec<NotificationSnapshot>) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    if notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notification-container",

            for notification in notifications.iter().rev() {
                NotificationToast {
                    key: "{notification.id}",
                    notification: notification.clone(),
                    on_dismiss: {
                        let app_state = app_state.clone();
                        let id = notification.id;
                        move |()| {
                            app_state.dispatch(AppCommand::DismissNotification(id), &mut snapshot_signal);
                        }
                    },
                }
            }
        }
    }
}

/// A single notification toast.
#[component]
fn NotificationToast(notification: NotificationSnapshot, on_dismiss: EventHandler<()>) -> Element {
    let severity_class = match notification.severity {
        NotificationSeverity::Error => "notification-error",
        NotificationSeverity::Info => "notification-info",
        NotificationSeverity::Success => "notification-success",
    };

    rsx! {
        div {
            class: "notification-toast {severity_class}",
            role: "status",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "notification-message",
                "{notification.message}"
            }

            button {
                class: "notification-close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_dismiss.call(());
                },
                CloseIcon { size: 14 }
            }
        }
    }
}
