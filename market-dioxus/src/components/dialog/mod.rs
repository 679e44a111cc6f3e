//! Application dialogs and notifications.
//!
//! Concrete dialogs built on the generic modal shells, wired to the state
//! container through [`AppCommand`](crate::state::AppCommand)s.

mod login;
mod notification;
mod register;

pub use login::LoginModal;
pub use notification::NotificationContainer;
pub use register::RegisterModal;

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::components::icons::ProviderIcon;
use crate::components::Button;
use crate::state::AppCommand;

/// "Continue with ..." buttons for every sign-in provider.
#[component]
fn ProviderButtons(send: Callback<AppCommand>) -> Element {
    rsx! {
        for provider in AuthProvider::ALL {
            Button {
                key: "{provider}",
                label: provider.label().to_string(),
                outline: true,
                icon: rsx! { ProviderIcon { provider } },
                on_click: move |()| send.call(AppCommand::SignIn(provider)),
            }
        }
    }
}
