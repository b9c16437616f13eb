//! # Home View
//!
//! Dashboard showing the node's chain state.

use dioxus::prelude::*;

use crate::state::AppState;

/// Home dashboard view.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "home-view",

            h2 { "Dashboard" }

            match &*state.chain_info.read() {
                Some(info) => rsx! {
                    div {
                        class: "node-card",

                        div { strong { "Network: " } span { class: "mono", "{info.chain}" } }
                        div { strong { "Blocks: " } span { "{info.blocks}" } }
                        div { strong { "Headers: " } span { "{info.headers}" } }
                        div { strong { "Synced: " } span { "{info.sync_percent()}%" } }
                        div { strong { "Best block: " } span { class: "mono", "{info.best_block_hash}" } }
                    }
                },
                None => rsx! {
                    p { class: "text-secondary", "No chain information yet." }
                },
            }
        }
    }
}
