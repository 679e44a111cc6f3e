//! Application state management for Dioxus integration.
//!
//! All mutable application state lives in one [`MarketContext`] on the UI
//! thread. Components never mutate it directly: they send [`AppCommand`]s
//! through a channel and render from an [`AppSnapshot`]. Remote calls run as
//! spawned tasks that report back with a follow-up command.
//!
//! This module provides:
//! - `MarketContext`: the state container with command handling
//! - `AppSnapshot`: a read-only snapshot of the state for rendering
//! - `AppCommand`: commands that can be sent to the container

mod modals;
mod types;

pub use modals::ModalRegistry;
pub use types::{
    AppCommand, AppSnapshot, ModalKind, NotificationSeverity, NotificationSnapshot,
    RegisterSnapshot,
};

use std::future::Future;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiResult, ContactUpdate, MarketApi, SafeUser};
use crate::config::MarketConfig;
use crate::forms::{FormErrors, RegisterForm};

/// How long a toast stays on screen.
const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

/// The state container that lives on the UI thread.
pub struct MarketContext {
    command_rx: mpsc::Receiver<AppCommand>,
    /// Sender for follow-up commands from spawned tasks.
    pub(crate) command_tx: mpsc::Sender<AppCommand>,
    api: Arc<dyn MarketApi>,
    api_base: String,
    user_id: Option<String>,

    pub(crate) modals: ModalRegistry,

    // Registration dialog
    pub(crate) register_form: RegisterForm,
    pub(crate) register_errors: FormErrors,
    pub(crate) register_loading: bool,

    // Contact card
    pub(crate) current_user: Option<SafeUser>,
    pub(crate) contact_saving: bool,

    pub(crate) notifications: Vec<NotificationSnapshot>,
    notification_id_counter: u64,
    pub(crate) pending_navigation: Option<String>,

    close_delay_ms: u64,
}

impl MarketContext {
    pub fn new(
        config: &MarketConfig,
        api: Arc<dyn MarketApi>,
        command_rx: mpsc::Receiver<AppCommand>,
        command_tx: mpsc::Sender<AppCommand>,
    ) -> Self {
        Self {
            command_rx,
            command_tx,
            api,
            api_base: config.api_base().to_string(),
            user_id: config.session.user_id.clone(),
            modals: ModalRegistry::default(),
            register_form: RegisterForm::default(),
            register_errors: FormErrors::new(),
            register_loading: false,
            current_user: None,
            contact_saving: false,
            notifications: Vec::new(),
            notification_id_counter: 0,
            pending_navigation: None,
            close_delay_ms: config.modal.close_delay_ms,
        }
    }

    /// Drain and handle every queued command.
    pub fn process_commands(&mut self) {
        while let Ok(cmd) = self.command_rx.try_recv() {
            self.handle_command(cmd);
        }
    }

    pub fn handle_command(&mut self, cmd: AppCommand) {
        log::debug!("Handling command: {cmd:?}");
        match cmd {
            AppCommand::OpenModal(kind) => self.modals.open(kind),
            AppCommand::CloseModal(kind) => self.modals.close(kind),
            AppCommand::SwitchModal(kind) => self.modals.switch_to(kind),

            AppCommand::RegisterInput { field, value } => {
                if !value.trim().is_empty() {
                    self.register_errors.remove(&field);
                }
                self.register_form.set(field, value);
            }
            AppCommand::RegisterSubmit => self.submit_registration(),
            AppCommand::RegisterFinished(result) => {
                self.register_loading = false;
                match result {
                    Ok(()) => {
                        self.modals.close(ModalKind::Register);
                        self.register_form = RegisterForm::default();
                        self.show_notification(
                            "Successfully registered!".to_string(),
                            NotificationSeverity::Success,
                        );
                    }
                    Err(err) => {
                        log::error!("Registration failed: {err}");
                        self.show_notification(
                            "Something went wrong".to_string(),
                            NotificationSeverity::Error,
                        );
                    }
                }
            }

            AppCommand::SignIn(provider) => {
                log::info!("Signing in with {provider}");
                self.pending_navigation = Some(provider.sign_in_url(&self.api_base));
            }
            AppCommand::Navigate(target) => {
                self.pending_navigation = Some(self.resolve_link(&target));
            }
            AppCommand::NavigationHandled => self.pending_navigation = None,

            AppCommand::LoadCurrentUser => self.load_current_user(),
            AppCommand::CurrentUserLoaded(result) => match result {
                Ok(user) => self.current_user = Some(user),
                Err(err) => {
                    log::error!("Failed to load current user: {err}");
                    self.show_notification(
                        "Could not load your profile".to_string(),
                        NotificationSeverity::Error,
                    );
                }
            },
            AppCommand::ContactSubmit(update) => self.submit_contact(update),
            AppCommand::ContactUpdated(result) => {
                self.contact_saving = false;
                match result {
                    Ok(user) => {
                        self.current_user = Some(user);
                        self.show_notification(
                            "Contact details updated".to_string(),
                            NotificationSeverity::Success,
                        );
                    }
                    Err(err) => {
                        log::error!("Contact update failed: {err}");
                        self.show_notification(
                            "Something went wrong".to_string(),
                            NotificationSeverity::Error,
                        );
                    }
                }
            }

            AppCommand::ShowNotification { message, severity } => {
                self.show_notification(message, severity);
            }
            AppCommand::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }
        }
    }

    /// Create a snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            register: RegisterSnapshot {
                is_open: self.modals.is_open(ModalKind::Register),
                loading: self.register_loading,
                email: self.register_form.email.clone(),
                name: self.register_form.name.clone(),
                password: self.register_form.password.clone(),
                errors: self
                    .register_errors
                    .iter()
                    .map(|(field, err)| (*field, err.to_string()))
                    .collect(),
            },
            login_open: self.modals.is_open(ModalKind::Login),
            current_user: self.current_user.clone(),
            contact_saving: self.contact_saving,
            notifications: self.notifications.clone(),
            pending_navigation: self.pending_navigation.clone(),
            close_delay_ms: self.close_delay_ms,
        }
    }

    /// Site-relative links resolve against the marketplace base URL.
    fn resolve_link(&self, target: &str) -> String {
        if target.starts_with('/') {
            format!("{}{target}", self.api_base)
        } else {
            target.to_string()
        }
    }

    fn submit_registration(&mut self) {
        // The dialog is disabled while a request is in flight.
        if self.register_loading {
            return;
        }
        match self.register_form.validate() {
            Err(errors) => {
                log::debug!("Registration form incomplete: {} missing", errors.len());
                self.register_errors = errors;
            }
            Ok(request) => {
                self.register_errors.clear();
                self.register_loading = true;
                let api = Arc::clone(&self.api);
                self.spawn_request(
                    async move { api.register(&request).await },
                    AppCommand::RegisterFinished,
                );
            }
        }
    }

    fn load_current_user(&mut self) {
        let Some(user_id) = self.user_id.clone() else {
            log::debug!("No session user configured");
            return;
        };
        let api = Arc::clone(&self.api);
        self.spawn_request(
            async move { api.fetch_user(&user_id).await },
            AppCommand::CurrentUserLoaded,
        );
    }

    fn submit_contact(&mut self, update: ContactUpdate) {
        if self.contact_saving {
            return;
        }
        let Some(user_id) = self.current_user.as_ref().map(|user| user.id.clone()) else {
            log::warn!("Contact update requested without a signed-in user");
            return;
        };
        self.contact_saving = true;
        let api = Arc::clone(&self.api);
        self.spawn_request(
            async move { api.update_user(&user_id, &update).await },
            AppCommand::ContactUpdated,
        );
    }

    /// Run an API call in the background and feed its outcome back as a command.
    fn spawn_request<T, F>(&self, request: F, on_done: fn(Result<T, String>) -> AppCommand)
    where
        T: Send + 'static,
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let tx = self.command_tx.clone();
        tokio::spawn(async move {
            let result = request.await.map_err(|err| err.to_string());
            let _ = tx.send(on_done(result));
        });
    }

    pub(crate) fn show_notification(&mut self, message: String, severity: NotificationSeverity) {
        self.notification_id_counter += 1;
        self.notifications.push(NotificationSnapshot {
            id: self.notification_id_counter,
            message,
            severity,
        });

        // Auto-dismiss - schedule via command
        let id = self.notification_id_counter;
        let tx = self.command_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
            let _ = tx.send(AppCommand::DismissNotification(id));
        });
    }
}
