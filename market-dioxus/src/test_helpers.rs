//! Test helpers for state container tests.
//!
//! Provides an in-memory [`MarketApi`] and utilities to build a
//! `MarketContext` around it and let spawned requests finish.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::api::{ApiError, ApiResult, ContactUpdate, MarketApi, RegisterRequest, SafeUser};
use crate::config::MarketConfig;
use crate::modal::{ControllerCell, ModalActions, ModalController, ModalFlags, ModalPhase, ModalVariant};
use crate::state::{AppCommand, MarketContext};

/// A request received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Register(RegisterRequest),
    FetchUser(String),
    UpdateUser(String, ContactUpdate),
}

/// In-memory API that records every call.
///
/// Users known to the fake are returned by `fetch_user` and patched in
/// place by `update_user`. With `failing` set every call answers 500.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<ApiCall>>,
    pub users: Mutex<Vec<SafeUser>>,
    pub failing: bool,
}

impl FakeApi {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_user(user: SafeUser) -> Self {
        let api = Self::default();
        api.users.lock().push(user);
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    fn outcome(&self) -> ApiResult<()> {
        if self.failing {
            Err(ApiError::Status {
                status: 500,
                message: "Internal Error".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn find_user(&self, user_id: &str) -> ApiResult<SafeUser> {
        self.users
            .lock()
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("no user {user_id}"),
            })
    }
}

#[async_trait]
impl MarketApi for FakeApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.calls.lock().push(ApiCall::Register(request.clone()));
        self.outcome()
    }

    async fn fetch_user(&self, user_id: &str) -> ApiResult<SafeUser> {
        self.calls.lock().push(ApiCall::FetchUser(user_id.to_string()));
        self.outcome()?;
        self.find_user(user_id)
    }

    async fn update_user(&self, user_id: &str, update: &ContactUpdate) -> ApiResult<SafeUser> {
        self.calls
            .lock()
            .push(ApiCall::UpdateUser(user_id.to_string(), update.clone()));
        self.outcome()?;
        let mut users = self.users.lock();
        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("no user {user_id}"),
            })?;
        user.phone = Some(update.phone.clone());
        user.pickup_address = Some(update.pickup_address.clone());
        Ok(user.clone())
    }
}

/// A user with every contact field filled in.
pub fn sample_user(id: &str) -> SafeUser {
    SafeUser {
        id: id.to_string(),
        name: Some("Ada".to_string()),
        email: Some("ada@example.org".to_string()),
        image: None,
        phone: Some("555-0100".to_string()),
        pickup_address: Some("1 Main St".to_string()),
        final_pickup_date: None,
    }
}

/// Create a `MarketContext` backed by `api` with the given configuration.
pub fn test_context_with(config: &MarketConfig, api: Arc<FakeApi>) -> MarketContext {
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    MarketContext::new(config, api, command_rx, command_tx)
}

/// Create a `MarketContext` backed by `api` with default configuration.
pub fn test_context(api: Arc<FakeApi>) -> MarketContext {
    test_context_with(&MarketConfig::default(), api)
}

/// Let spawned requests run, then handle the commands they sent back.
///
/// Must be called from within a Tokio runtime.
pub async fn settle(ctx: &mut MarketContext) {
    for _ in 0..8 {
        tokio::task::yield_now().await;
        ctx.process_commands();
    }
}

/// Controller shared the way a dialog shell shares it, counting re-renders.
#[derive(Clone)]
pub struct SharedController {
    controller: Rc<RefCell<ModalController>>,
    renders: Rc<RefCell<u32>>,
}

impl SharedController {
    /// An open dialog with the given flags.
    pub fn new(variant: ModalVariant, flags: ModalFlags) -> Self {
        Self {
            controller: Rc::new(RefCell::new(
                ModalController::new(variant, true).with_flags(flags),
            )),
            renders: Rc::default(),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.controller.borrow().phase()
    }

    pub fn renders(&self) -> u32 {
        *self.renders.borrow()
    }
}

impl ControllerCell for SharedController {
    fn update<R>(&self, f: impl FnOnce(&mut ModalController) -> R) -> R {
        f(&mut self.controller.borrow_mut())
    }

    fn changed(&self) {
        *self.renders.borrow_mut() += 1;
    }
}

/// Dialog callbacks that only record what was called.
#[derive(Clone, Default)]
pub struct RecordedActions {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordedActions {
    pub fn taken(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }
}

impl ModalActions for RecordedActions {
    fn close(&self) {
        self.log.borrow_mut().push("close");
    }

    fn submit(&self) {
        self.log.borrow_mut().push("submit");
    }

    fn secondary(&self) {
        self.log.borrow_mut().push("secondary");
    }
}

/// Dialog callbacks that feed the state container like the real dialogs do.
#[derive(Clone)]
pub struct CommandActions {
    pub tx: mpsc::Sender<AppCommand>,
    pub on_close: AppCommand,
    pub on_submit: Option<AppCommand>,
}

impl ModalActions for CommandActions {
    fn close(&self) {
        let _ = self.tx.send(self.on_close.clone());
    }

    fn submit(&self) {
        if let Some(cmd) = &self.on_submit {
            let _ = self.tx.send(cmd.clone());
        }
    }

    fn secondary(&self) {}
}
