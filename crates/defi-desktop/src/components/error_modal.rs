//! # Error Modal
//!
//! Error popover rendered inside the running shell.

use dioxus::prelude::*;

use crate::state::AppState;

/// Error popover, rendered only while the error modal is open.
#[component]
pub fn ErrorModal() -> Element {
    let mut state = use_context::<AppState>();

    if !*state.is_error_modal_open.read() {
        return rsx! {};
    }

    let message = state.error_message.read().clone();

    rsx! {
        div {
            class: "popover-backdrop",

            div {
                class: "popover error-modal",
                role: "alertdialog",

                h3 { "Something went wrong" }

                p { class: "mono", "{message}" }

                button {
                    class: "btn-primary",
                    onclick: move |_| state.close_error_modal(),
                    "Close"
                }
            }
        }
    }
}
