//! # DeFi Desktop
//!
//! Native desktop client for a DeFi blockchain node.
//!
//! ## Architecture
//!
//! The root component mounts a [`defi_shell::ReadinessGate`], which asks the
//! RPC configuration collaborator to locate and probe the node once. Until the
//! node answers, the launch screen is shown; afterwards the router renders the
//! running shell, which animates route changes by path depth. The update
//! overlay is mounted in both cases.
//!
//! ## Modules
//!
//! - [`api`] - JSON-RPC client and `defi.conf` parsing
//! - [`components`] - Shell, launch screen and overlay components
//! - [`config`] - Persisted client settings
//! - [`router`] - Application routes
//! - [`rpc_configuration`] - Node bootstrap
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config as WindowConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use defi_shell::ViewMode;

mod api;
mod components;
mod config;
mod router;
mod rpc_configuration;
mod state;
mod views;

use components::{LaunchScreen, UpdateProgressModal};
use config::Config;
use router::Route;
use rpc_configuration::RpcConfiguration;
use state::{AppState, GateHandle};

/// Window and document title.
const TITLE: &str = "DeFi Blockchain Client";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "defi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DeFi Desktop");

    let window = Config::load().window;
    let cfg = WindowConfig::new().with_window(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(window.width, window.height))
            .with_min_inner_size(LogicalSize::new(900.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides global state, mounts the readiness gate and renders either the
/// launch screen or the router, with the update overlay on top.
#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let gate = use_hook(|| GateHandle::mount(RpcConfiguration::new(state)));
    use_context_provider(|| gate.clone());

    let plan = gate.render(&state.readiness());

    rsx! {
        document::Title { "{TITLE}" }
        document::Stylesheet { href: asset!("/assets/styles.css") }

        match plan.mode {
            ViewMode::Launch(view) => rsx! {
                LaunchScreen { message: view.message, is_loading: view.loading }
            },
            ViewMode::Running(_) => rsx! {
                Router::<Route> {}
            },
        }

        if plan.update_overlay {
            UpdateProgressModal {}
        }
    }
}
