//! # Launch Screen
//!
//! Shown while the node is starting or after it failed to start.

use dioxus::prelude::*;

use super::Loader;

/// Launch screen component.
///
/// Displays the node error verbatim under a spinner that turns while the
/// RPC configuration is fetched.
#[component]
pub fn LaunchScreen(message: String, is_loading: bool) -> Element {
    rsx! {
        div {
            class: "launch-screen",

            h1 { class: "launch-title", "DeFi Blockchain Client" }

            if is_loading {
                Loader { size: 48, class: "launch-loader" }
            }

            if !message.is_empty() {
                p {
                    class: "launch-message",
                    "{message}"
                }
            }
        }
    }
}
