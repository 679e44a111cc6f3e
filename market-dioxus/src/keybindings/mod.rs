//! Keyboard handling for dialogs.
//!
//! Translates Dioxus keyboard events into modal interactions. Whether an
//! interaction has any effect is decided by the modal controller.

mod modal;

pub use modal::{key_interaction, should_stop_enter};
