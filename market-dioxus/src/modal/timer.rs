//! Deferred close notification.
//!
//! The dialog hides immediately and notifies its owner once the exit
//! animation has had time to run. The wait is a suspended task, never a
//! blocking sleep; dropping the task before it wakes cancels the
//! notification.

use std::time::Duration;

use super::CloseTicket;

/// Delay between hiding a dialog and calling its `on_close`, in milliseconds.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 300;

/// Wait `delay`, then hand the ticket to `complete`.
///
/// Returns whatever `complete` reports, i.e. whether the ticket was still
/// current and the owner should be notified.
pub async fn close_after<F>(delay: Duration, ticket: CloseTicket, complete: F) -> bool
where
    F: FnOnce(CloseTicket) -> bool,
{
    tokio::time::sleep(delay).await;
    let current = complete(ticket);
    log::debug!(
        "close delay elapsed for session {} (notify: {current})",
        ticket.session()
    );
    current
}
