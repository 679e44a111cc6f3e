//! UI Components for the marketplace.
//!
//! This module contains all Dioxus UI components, organized into submodules:
//! - `modal` - generic dialog shells (full and blank)
//! - `dialog` - registration and login dialogs, notification toasts
//! - leaf components (buttons, inputs, headings, avatar, logo, navbar)
//! - `item_owner` - contact card of an item's owner

mod avatar;
mod button;
mod dialog;
mod heading;
pub(crate) mod icons;
mod input;
mod item_owner;
mod logo;
mod modal;
mod modal_overlay;
mod navbar;

pub use avatar::Avatar;
pub use button::Button;
pub use dialog::{LoginModal, NotificationContainer, RegisterModal};
pub use heading::Heading;
pub use input::TextInput;
pub use item_owner::{can_edit_contact, ItemOwner};
pub use logo::Logo;
pub use modal::{BlankModal, Modal};
pub use modal_overlay::ModalOverlay;
pub use navbar::Navbar;
