//! Modal dialog core.
//!
//! The controller is a plain state machine (CLOSED, OPEN, CLOSING) with no
//! knowledge of rendering; the timer bridges the CLOSING phase to the
//! caller's `on_close` notification, and the driver ties both to whatever
//! holds the controller.

mod controller;
mod driver;
mod timer;

pub use controller::{
    CloseTicket, ModalController, ModalEffect, ModalFlags, ModalInteraction, ModalPhase,
    ModalVariant, PointerTarget,
};
pub use driver::{drive, ControllerCell, ModalActions};
pub use timer::{close_after, DEFAULT_CLOSE_DELAY_MS};
