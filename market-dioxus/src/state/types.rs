//! Data types for application state management.
//!
//! Shared structures passed between the state container and the view layer:
//! commands flowing in, snapshots flowing out.

use crate::api::{ContactUpdate, SafeUser};
use crate::auth::AuthProvider;
use crate::forms::RegisterField;

/// Dialogs addressable through the modal registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalKind {
    Register,
    Login,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Error,
    Info,
    Success,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSnapshot {
    pub id: u64,
    pub message: String,
    pub severity: NotificationSeverity,
}

/// Commands that can be sent to the state container.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // Modal registry
    OpenModal(ModalKind),
    CloseModal(ModalKind),
    /// Close every other auth dialog and open this one.
    SwitchModal(ModalKind),

    // Registration
    RegisterInput { field: RegisterField, value: String },
    RegisterSubmit,
    RegisterFinished(Result<(), String>),

    // Authentication and navigation
    SignIn(AuthProvider),
    Navigate(String),
    NavigationHandled,

    // Current user and contact card
    LoadCurrentUser,
    CurrentUserLoaded(Result<SafeUser, String>),
    /// Contact card submitted its edit buffer.
    ContactSubmit(ContactUpdate),
    ContactUpdated(Result<SafeUser, String>),

    // Notifications
    ShowNotification {
        message: String,
        severity: NotificationSeverity,
    },
    DismissNotification(u64),
}

/// Registration dialog state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterSnapshot {
    pub is_open: bool,
    pub loading: bool,
    pub email: String,
    pub name: String,
    pub password: String,
    /// Validation messages keyed by field.
    pub errors: Vec<(RegisterField, String)>,
}

impl RegisterSnapshot {
    #[must_use]
    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Email => &self.email,
            RegisterField::Name => &self.name,
            RegisterField::Password => &self.password,
        }
    }

    #[must_use]
    pub fn error(&self, field: RegisterField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }
}

/// A snapshot of the application state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppSnapshot {
    pub register: RegisterSnapshot,
    pub login_open: bool,
    pub current_user: Option<SafeUser>,
    pub contact_saving: bool,
    pub notifications: Vec<NotificationSnapshot>,
    /// URL the view layer should navigate to next.
    pub pending_navigation: Option<String>,
    pub close_delay_ms: u64,
}
