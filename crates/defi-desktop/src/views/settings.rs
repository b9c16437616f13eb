//! # Settings View
//!
//! Node configuration file, network, and a reconnect probe.

use std::path::PathBuf;

use dioxus::prelude::*;

use crate::rpc_configuration::probe_node;
use crate::state::AppState;

/// Settings view component.
///
/// Edits where `defi.conf` lives and which network section applies. A failed
/// reconnect opens the error modal, since the shell is already running.
#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<AppState>();
    let mut conf_input = use_signal(|| {
        state
            .config
            .read()
            .node_conf_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    });
    let mut network_input = use_signal(|| state.config.read().network.clone());
    let mut probing = use_signal(|| false);

    let on_save = move |_| {
        let conf = conf_input.read().trim().to_string();
        let network = network_input.read().trim().to_string();
        {
            let mut config = state.config.write();
            config.node_conf_path = (!conf.is_empty()).then(|| PathBuf::from(conf));
            config.network = network;
        }
        state.save_config();
    };

    let on_reconnect = move |_| {
        probing.set(true);
        let config = state.config.read().clone();
        spawn(async move {
            match probe_node(&config).await {
                Ok(info) => state.mark_running(info),
                Err(e) => {
                    tracing::warn!(error = %e, "Reconnect failed");
                    state.open_error_modal(e.to_string());
                }
            }
            probing.set(false);
        });
    };

    let endpoint = use_memo(move || {
        state
            .config
            .read()
            .rpc_configs()
            .map(|c| c.endpoint())
            .unwrap_or_else(|e| e.to_string())
    });

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Settings" }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Node Connection" }

                div {
                    class: "mb-md",

                    label { "Node configuration file" }

                    input {
                        r#type: "text",
                        value: "{conf_input}",
                        oninput: move |evt| conf_input.set(evt.value()),
                    }
                }

                div {
                    class: "mb-md",

                    label { "Network" }

                    input {
                        r#type: "text",
                        value: "{network_input}",
                        oninput: move |evt| network_input.set(evt.value()),
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        onclick: on_save,
                        "Save"
                    }

                    button {
                        class: "btn-success",
                        onclick: on_reconnect,
                        disabled: *probing.read(),
                        if *probing.read() { "Connecting..." } else { "Reconnect" }
                    }
                }
            }

            div {
                class: "current-state",

                h3 { class: "mb-md", "Current State" }

                div {
                    strong { "RPC endpoint: " }
                    span { class: "mono", "{endpoint}" }
                }
            }
        }
    }
}
