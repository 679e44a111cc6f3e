//! Carrying out controller effects.
//!
//! [`drive`] feeds one interaction to a shared controller, runs the
//! immediate callbacks and hands back the delayed close as a future. The
//! caller spawns that future on a task owned by the dialog, so dropping the
//! task (the dialog unmounted) means `close` never runs.

use std::future::Future;
use std::time::Duration;

use super::{close_after, ModalController, ModalEffect, ModalInteraction};

/// Shared storage of a dialog's controller.
pub trait ControllerCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut ModalController) -> R) -> R;

    /// The controller changed in a way the view has to show.
    fn changed(&self);
}

/// Owner callbacks of a dialog.
pub trait ModalActions: Clone + 'static {
    fn close(&self);
    fn submit(&self);
    fn secondary(&self);
}

/// Route `interaction` through the controller held by `cell`.
///
/// Submit and secondary callbacks run before this returns. A scheduled
/// close comes back as a future that waits `delay`, completes the ticket
/// and calls `close` if the ticket was still current.
pub fn drive<C, A>(
    cell: &C,
    interaction: ModalInteraction,
    actions: &A,
    delay: Duration,
) -> (ModalEffect, Option<impl Future<Output = ()> + 'static>)
where
    C: ControllerCell,
    A: ModalActions,
{
    let effect = cell.update(|controller| controller.interact(interaction));
    if effect != ModalEffect::None {
        cell.changed();
    }

    let close_task = match effect {
        ModalEffect::CloseScheduled(ticket) => {
            let cell = cell.clone();
            let actions = actions.clone();
            Some(async move {
                let notify = close_after(delay, ticket, |ticket| {
                    cell.update(|controller| controller.complete_close(ticket))
                })
                .await;
                if notify {
                    cell.changed();
                    actions.close();
                }
            })
        }
        ModalEffect::Submit => {
            actions.submit();
            None
        }
        ModalEffect::SecondaryAction => {
            actions.secondary();
            None
        }
        ModalEffect::None => None,
    };

    (effect, close_task)
}
