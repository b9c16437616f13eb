//! # Update Progress
//!
//! Overlay shown while an application update downloads.

use dioxus::prelude::*;

use crate::state::AppState;

/// Update overlay.
///
/// Mounted at the root regardless of the node state, since an update can run
/// before the node reports running. Renders nothing while closed.
#[component]
pub fn UpdateProgressModal() -> Element {
    let mut state = use_context::<AppState>();

    if !*state.is_update_modal_open.read() {
        return rsx! {};
    }

    let downloaded = *state.update_progress.read();
    let done = downloaded.is_some_and(|p| p >= 100);

    rsx! {
        div {
            class: "popover-backdrop",

            div {
                class: "popover update-modal",
                role: "dialog",

                h3 { "Updating" }

                match downloaded {
                    Some(percent) => rsx! {
                        progress { max: "100", value: "{percent}" }
                        p { "{percent}%" }
                    },
                    None => rsx! {
                        p { "Preparing update..." }
                    },
                }

                if done {
                    button {
                        class: "btn-primary",
                        onclick: move |_| state.close_update_modal(),
                        "Close"
                    }
                }
            }
        }
    }
}
