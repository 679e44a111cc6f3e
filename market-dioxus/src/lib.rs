//! Market Dioxus - presentation layer of the MTSA marketplace
//!
//! This crate provides Dioxus components for the marketplace frontend:
//! reusable dialogs, the registration and login flows, the item-owner
//! contact card and the navbar, backed by the remote marketplace API.
//!
//! ## Quick Start
//!
//! ```no_run
//! use market_dioxus::MarketConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = MarketConfig::load_default()?;
//!     let runtime = tokio::runtime::Runtime::new()?;
//!     let _guard = runtime.enter();
//!     market_dioxus::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. `MarketContext` lives on the main thread and is never shared
//! 2. Components render from `AppSnapshot`s of that state
//! 3. Components send `AppCommand`s via a channel, processed on the main thread
//! 4. Dialog visibility and close animation are owned by each dialog component,
//!    driven by the headless `modal::ModalController`

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;

// Public library modules
pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod forms;
pub mod hooks;
pub mod keybindings;
pub mod modal;
pub mod state;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::MarketConfig;
pub use state::{AppCommand, AppSnapshot, MarketContext};

use crate::api::{HttpMarketApi, MarketApi};

// Thread-local storage for MarketContext to allow synchronous command processing
thread_local! {
    pub(crate) static MARKET_CTX: RefCell<Option<Rc<RefCell<MarketContext>>>> = const { RefCell::new(None) };
}

/// Stylesheet injected into the webview head.
const STYLESHEET: &str = include_str!("../assets/main.css");

/// Launch the Dioxus desktop application.
///
/// A Tokio runtime must be active (via `Runtime::enter()`) before calling
/// this: API requests and dialog timers are spawned on it.
pub fn launch(config: MarketConfig) -> Result<()> {
    let api: Arc<dyn MarketApi> = Arc::new(HttpMarketApi::new(&config.api)?);

    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let market_ctx = MarketContext::new(&config, api, command_rx, command_tx.clone());

    if config.session.user_id.is_some() {
        let _ = command_tx.send(AppCommand::LoadCurrentUser);
    }

    let initial_snapshot = market_ctx.snapshot();

    // Wrap in Rc<RefCell> for single-threaded access
    let market_ctx = Rc::new(RefCell::new(market_ctx));

    // Store in thread-local for synchronous command processing from Dioxus components
    MARKET_CTX.with(|ctx| {
        *ctx.borrow_mut() = Some(market_ctx.clone());
    });

    let app_state = AppState {
        command_tx,
        snapshot: Arc::new(parking_lot::Mutex::new(initial_snapshot)),
    };

    let market_ctx_clone = market_ctx.clone();
    let snapshot_ref = app_state.snapshot.clone();
    let custom_head = format!("<style>{STYLESHEET}</style>");

    log::info!("Launching window '{}'", config.window.title);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head)
                .with_custom_event_handler(move |_event, _target| {
                    // Process commands on each event loop iteration
                    if let Ok(mut ctx) = market_ctx_clone.try_borrow_mut() {
                        ctx.process_commands();
                        *snapshot_ref.lock() = ctx.snapshot();
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    pub command_tx: mpsc::Sender<AppCommand>,
    pub snapshot: Arc<parking_lot::Mutex<AppSnapshot>>,
}

impl AppState {
    /// Send a command to the state container.
    pub fn send_command(&self, cmd: AppCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Process pending commands and update the snapshot synchronously.
    pub fn process_commands_sync(&self) {
        MARKET_CTX.with(|ctx| {
            if let Some(ref market_ctx) = *ctx.borrow() {
                if let Ok(mut market) = market_ctx.try_borrow_mut() {
                    market.process_commands();
                    *self.snapshot.lock() = market.snapshot();
                }
            }
        });
    }

    /// Process pending commands and push the new snapshot into the signal
    /// when it changed, triggering a re-render of its readers.
    pub fn process_and_notify(&self, signal: &mut Signal<AppSnapshot>) {
        self.process_commands_sync();
        let snapshot = self.get_snapshot();
        if *signal.peek() != snapshot {
            signal.set(snapshot);
        }
    }

    /// Send a command and immediately re-render from the resulting state.
    pub fn dispatch(&self, cmd: AppCommand, signal: &mut Signal<AppSnapshot>) {
        self.send_command(cmd);
        self.process_and_notify(signal);
    }

    /// Get the current snapshot.
    pub fn get_snapshot(&self) -> AppSnapshot {
        self.snapshot.lock().clone()
    }
}
