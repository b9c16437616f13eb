//! # Application State
//!
//! Global state management using Dioxus signals and context.

use dioxus::prelude::*;

use defi_shell::ReadinessState;

use crate::api::BlockchainInfo;
use crate::config::Config;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// The node lifecycle fields are written by the RPC configuration bootstrap
/// and the modal controllers; the shell only reads them through
/// [`AppState::readiness`].
#[derive(Clone, Copy)]
pub struct AppState {
    /// Persisted client settings.
    pub config: Signal<Config>,

    // ==================== Node Lifecycle ====================
    /// Whether the node answered its RPC probe.
    pub is_running: Signal<bool>,

    /// Last node error, shown on the launch screen.
    pub node_error: Signal<String>,

    /// Whether the RPC configuration is being fetched.
    pub is_fetching: Signal<bool>,

    /// Chain state reported by the last successful probe.
    pub chain_info: Signal<Option<BlockchainInfo>>,

    // ==================== Modals ====================
    /// Whether the error modal is open.
    pub is_error_modal_open: Signal<bool>,

    /// Message of the error modal.
    pub error_message: Signal<String>,

    /// Whether the update-progress modal is open. Written by the client
    /// updater.
    pub is_update_modal_open: Signal<bool>,

    /// Update download progress in percent.
    pub update_progress: Signal<Option<u8>>,
}

impl AppState {
    /// Creates a new application state, loading persisted config from disk.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Signal::new(Config::load()),
            is_running: Signal::new(false),
            node_error: Signal::new(String::new()),
            is_fetching: Signal::new(false),
            chain_info: Signal::new(None),
            is_error_modal_open: Signal::new(false),
            error_message: Signal::new(String::new()),
            is_update_modal_open: Signal::new(false),
            update_progress: Signal::new(None),
        }
    }

    /// Snapshot read by the readiness gate. Subscribes the caller to every
    /// field it reads.
    #[must_use]
    pub fn readiness(&self) -> ReadinessState {
        ReadinessState {
            is_running: *self.is_running.read(),
            node_error: self.node_error.read().clone(),
            is_fetching: *self.is_fetching.read(),
            is_error_modal_open: *self.is_error_modal_open.read(),
            is_update_modal_open: *self.is_update_modal_open.read(),
        }
    }

    /// Opens the error modal with `message`.
    pub fn open_error_modal(&mut self, message: impl Into<String>) {
        self.error_message.set(message.into());
        self.is_error_modal_open.set(true);
    }

    /// Closes the error modal.
    pub fn close_error_modal(&mut self) {
        self.is_error_modal_open.set(false);
        self.error_message.set(String::new());
    }

    /// Closes the update-progress modal.
    pub fn close_update_modal(&mut self) {
        self.is_update_modal_open.set(false);
        self.update_progress.set(None);
    }

    /// Records a successful node probe.
    pub fn mark_running(&mut self, info: BlockchainInfo) {
        self.chain_info.set(Some(info));
        self.node_error.set(String::new());
        self.is_running.set(true);
    }

    /// Records a failed node probe.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.is_running.set(false);
        self.node_error.set(error.into());
    }

    /// Saves the current configuration to disk.
    pub fn save_config(&self) {
        if let Err(e) = self.config.read().save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
