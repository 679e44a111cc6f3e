//! Headless modal dialog controller.
//!
//! Owns the visibility, dismissal and action gating of one dialog session.
//! The Dioxus shell in `components::modal` feeds it interactions and acts on
//! the returned [`ModalEffect`]; nothing in here touches the DOM or a timer.

/// Feature set exposed by the dialog shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    /// Header, body, footer with primary/secondary actions and keyboard shortcuts.
    #[default]
    Full,
    /// Header and body only. Closes via backdrop or close button, never submits.
    Blank,
}

/// Lifecycle phase derived from the controller flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    /// Hidden but still mounted while the exit animation runs.
    Closing,
}

/// Element that received a pointer-down inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The backdrop element itself.
    Backdrop,
    /// Anything inside the dialog panel.
    Content,
}

/// User interactions the shell forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalInteraction {
    CloseButton,
    PointerDown(PointerTarget),
    EscapeKey,
    EnterKey,
    PrimaryButton,
    SecondaryButton,
}

/// Caller-owned flags mirrored into the controller on every prop change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalFlags {
    /// Suppresses every dismiss and submit action (e.g. request in flight).
    pub disabled: bool,
    /// Disables the primary button only.
    pub action_disabled: bool,
    /// Whether a secondary action callback and label were supplied.
    pub has_secondary_action: bool,
}

/// Token for a scheduled close, bound to the session that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket {
    session: u64,
}

impl CloseTicket {
    #[must_use]
    pub fn session(self) -> u64 {
        self.session
    }
}

/// What the shell must do after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    None,
    /// Visibility already dropped; notify `on_close` once the delay elapses.
    CloseScheduled(CloseTicket),
    /// Invoke `on_submit` now.
    Submit,
    /// Invoke the secondary action now.
    SecondaryAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalController {
    variant: ModalVariant,
    requested_open: bool,
    visible: bool,
    flags: ModalFlags,
    /// Incremented each time the open intent rises.
    session: u64,
    /// Session whose close notification has not fired yet.
    pending_close: Option<u64>,
}

impl ModalController {
    #[must_use]
    pub fn new(variant: ModalVariant, is_open: bool) -> Self {
        Self {
            variant,
            requested_open: is_open,
            visible: is_open,
            flags: ModalFlags::default(),
            session: u64::from(is_open),
            pending_close: None,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ModalFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        if self.visible {
            ModalPhase::Open
        } else if self.pending_close.is_some() {
            ModalPhase::Closing
        } else {
            ModalPhase::Closed
        }
    }

    /// Mirror the caller's open intent.
    ///
    /// Only edges matter: a rising edge starts a fresh session and shows the
    /// dialog in the same update, a falling edge hides it at once without
    /// scheduling a notification (the caller is the one closing).
    pub fn set_open(&mut self, is_open: bool) {
        if is_open == self.requested_open {
            return;
        }
        self.requested_open = is_open;
        self.visible = is_open;
        if is_open {
            self.session += 1;
            self.pending_close = None;
        }
    }

    pub fn set_flags(&mut self, flags: ModalFlags) {
        self.flags = flags;
    }

    /// Apply the caller's current props in one step.
    ///
    /// The shell calls this while rendering, so the phase it reads right
    /// after already reflects a fresh open intent or `disabled` flag.
    pub fn sync(&mut self, is_open: bool, flags: ModalFlags) {
        self.set_open(is_open);
        self.set_flags(flags);
    }

    /// Hide the dialog and hand out a ticket for the delayed `on_close`.
    ///
    /// Returns `None` while disabled, when nothing is visible, or when this
    /// session already has a close in flight.
    pub fn request_close(&mut self) -> Option<CloseTicket> {
        if self.flags.disabled || !self.visible || self.pending_close.is_some() {
            return None;
        }
        self.visible = false;
        self.pending_close = Some(self.session);
        Some(CloseTicket {
            session: self.session,
        })
    }

    /// Consume a ticket once its delay expired.
    ///
    /// Returns `true` exactly once per scheduled close; stale tickets from a
    /// previous session are ignored.
    pub fn complete_close(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close == Some(ticket.session) {
            self.pending_close = None;
            true
        } else {
            false
        }
    }

    /// Drop any close in flight without notifying (dialog unmounted).
    pub fn cancel_pending_close(&mut self) -> bool {
        self.pending_close.take().is_some()
    }

    /// Whether `on_submit` may run for the given trigger.
    #[must_use]
    pub fn can_submit(&self, interaction: ModalInteraction) -> bool {
        if self.flags.disabled || !self.visible || self.variant == ModalVariant::Blank {
            return false;
        }
        match interaction {
            ModalInteraction::EnterKey => true,
            ModalInteraction::PrimaryButton => !self.flags.action_disabled,
            _ => false,
        }
    }

    #[must_use]
    pub fn can_run_secondary(&self) -> bool {
        !self.flags.disabled
            && self.visible
            && self.variant == ModalVariant::Full
            && self.flags.has_secondary_action
    }

    /// Route an interaction through the dismissal and dispatch policies.
    pub fn interact(&mut self, interaction: ModalInteraction) -> ModalEffect {
        match interaction {
            ModalInteraction::CloseButton
            | ModalInteraction::PointerDown(PointerTarget::Backdrop) => self.close_effect(),
            ModalInteraction::EscapeKey if self.variant == ModalVariant::Full => {
                self.close_effect()
            }
            ModalInteraction::EnterKey | ModalInteraction::PrimaryButton
                if self.can_submit(interaction) =>
            {
                ModalEffect::Submit
            }
            ModalInteraction::SecondaryButton if self.can_run_secondary() => {
                ModalEffect::SecondaryAction
            }
            _ => ModalEffect::None,
        }
    }

    fn close_effect(&mut self) -> ModalEffect {
        self.request_close()
            .map_or(ModalEffect::None, ModalEffect::CloseScheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_full() -> ModalController {
        ModalController::new(ModalVariant::Full, true)
    }

    fn disabled() -> ModalFlags {
        ModalFlags {
            disabled: true,
            ..ModalFlags::default()
        }
    }

    #[test]
    fn opening_is_visible_in_the_same_update() {
        let mut modal = ModalController::new(ModalVariant::Full, false);
        assert_eq!(modal.phase(), ModalPhase::Closed);

        for _ in 0..3 {
            modal.set_open(true);
            assert!(modal.is_visible());
            assert_eq!(modal.phase(), ModalPhase::Open);
            modal.set_open(false);
            assert!(!modal.is_visible());
        }
    }

    #[test]
    fn sync_applies_props_before_the_phase_is_read() {
        let mut modal = ModalController::new(ModalVariant::Full, false);

        modal.sync(true, ModalFlags::default());
        assert_eq!(modal.phase(), ModalPhase::Open);

        modal.sync(true, disabled());
        assert_eq!(modal.request_close(), None);
        assert_eq!(modal.interact(ModalInteraction::EnterKey), ModalEffect::None);

        modal.sync(false, disabled());
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn external_close_hides_without_a_ticket() {
        let mut modal = open_full();
        modal.set_open(false);
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn close_while_disabled_is_a_no_op() {
        let mut modal = open_full().with_flags(disabled());
        let before = modal.clone();

        assert_eq!(modal.request_close(), None);
        assert_eq!(modal.interact(ModalInteraction::CloseButton), ModalEffect::None);
        assert_eq!(
            modal.interact(ModalInteraction::PointerDown(PointerTarget::Backdrop)),
            ModalEffect::None
        );
        assert_eq!(modal.interact(ModalInteraction::EscapeKey), ModalEffect::None);
        assert_eq!(modal, before);
    }

    #[test]
    fn close_hides_immediately_and_completes_once() {
        let mut modal = open_full();
        let ticket = modal.request_close().expect("close should be scheduled");

        assert!(!modal.is_visible());
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert_eq!(modal.request_close(), None);
        assert_eq!(modal.interact(ModalInteraction::CloseButton), ModalEffect::None);

        assert!(modal.complete_close(ticket));
        assert!(!modal.complete_close(ticket));
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn content_pointer_down_never_closes() {
        let mut modal = open_full();
        assert_eq!(
            modal.interact(ModalInteraction::PointerDown(PointerTarget::Content)),
            ModalEffect::None
        );
        assert!(modal.is_visible());
    }

    #[test]
    fn backdrop_pointer_down_schedules_close() {
        let mut modal = open_full();
        let effect = modal.interact(ModalInteraction::PointerDown(PointerTarget::Backdrop));
        assert!(matches!(effect, ModalEffect::CloseScheduled(_)));
        assert!(!modal.is_visible());
    }

    #[test]
    fn escape_closes_and_enter_submits() {
        let mut modal = open_full();
        assert_eq!(modal.interact(ModalInteraction::EnterKey), ModalEffect::Submit);
        assert!(modal.is_visible());

        let effect = modal.interact(ModalInteraction::EscapeKey);
        assert!(matches!(effect, ModalEffect::CloseScheduled(_)));
    }

    #[test]
    fn submit_never_changes_visibility() {
        let mut modal = open_full();
        for _ in 0..5 {
            assert_eq!(modal.interact(ModalInteraction::PrimaryButton), ModalEffect::Submit);
        }
        assert_eq!(modal.phase(), ModalPhase::Open);

        modal.set_flags(disabled());
        assert_eq!(modal.interact(ModalInteraction::EnterKey), ModalEffect::None);
        assert_eq!(modal.phase(), ModalPhase::Open);
    }

    #[test]
    fn action_disabled_only_gates_the_primary_button() {
        let mut modal = open_full().with_flags(ModalFlags {
            action_disabled: true,
            ..ModalFlags::default()
        });
        assert_eq!(modal.interact(ModalInteraction::PrimaryButton), ModalEffect::None);
        assert_eq!(modal.interact(ModalInteraction::EnterKey), ModalEffect::Submit);
    }

    #[test]
    fn secondary_action_requires_callback_and_enabled_dialog() {
        let mut modal = open_full();
        assert_eq!(modal.interact(ModalInteraction::SecondaryButton), ModalEffect::None);

        modal.set_flags(ModalFlags {
            has_secondary_action: true,
            ..ModalFlags::default()
        });
        assert_eq!(
            modal.interact(ModalInteraction::SecondaryButton),
            ModalEffect::SecondaryAction
        );

        modal.set_flags(ModalFlags {
            has_secondary_action: true,
            disabled: true,
            ..ModalFlags::default()
        });
        assert_eq!(modal.interact(ModalInteraction::SecondaryButton), ModalEffect::None);
    }

    #[test]
    fn blank_variant_only_closes_by_pointer_or_button() {
        let mut modal = ModalController::new(ModalVariant::Blank, true);
        assert_eq!(modal.interact(ModalInteraction::EnterKey), ModalEffect::None);
        assert_eq!(modal.interact(ModalInteraction::PrimaryButton), ModalEffect::None);
        assert_eq!(modal.interact(ModalInteraction::EscapeKey), ModalEffect::None);
        assert!(matches!(
            modal.interact(ModalInteraction::CloseButton),
            ModalEffect::CloseScheduled(_)
        ));
    }

    #[test]
    fn reopening_starts_a_fresh_session() {
        let mut modal = open_full();
        let first = modal.request_close().expect("first close");
        assert!(modal.complete_close(first));
        modal.set_open(false);

        modal.set_open(true);
        assert!(modal.is_visible());
        let second = modal.request_close().expect("second close");
        assert_ne!(first.session(), second.session());
        assert!(modal.complete_close(second));
        assert!(!modal.complete_close(second));
    }

    #[test]
    fn stale_ticket_is_ignored_after_reopen() {
        let mut modal = open_full();
        let stale = modal.request_close().expect("close");
        modal.set_open(false);
        modal.set_open(true);

        assert!(!modal.complete_close(stale));
        assert_eq!(modal.phase(), ModalPhase::Open);
    }

    #[test]
    fn reopen_during_closing_is_ignored() {
        let mut modal = open_full();
        let _ticket = modal.request_close().expect("close");
        modal.set_open(true);
        assert_eq!(modal.phase(), ModalPhase::Closing);
    }

    #[test]
    fn cancel_drops_pending_notification() {
        let mut modal = open_full();
        let ticket = modal.request_close().expect("close");
        assert!(modal.cancel_pending_close());
        assert!(!modal.complete_close(ticket));
        assert!(!modal.cancel_pending_close());
    }

    #[test]
    fn hidden_dialog_ignores_everything() {
        let mut modal = ModalController::new(ModalVariant::Full, false);
        for interaction in [
            ModalInteraction::CloseButton,
            ModalInteraction::PointerDown(PointerTarget::Backdrop),
            ModalInteraction::EscapeKey,
            ModalInteraction::EnterKey,
            ModalInteraction::PrimaryButton,
            ModalInteraction::SecondaryButton,
        ] {
            assert_eq!(modal.interact(interaction), ModalEffect::None);
        }
    }
}
