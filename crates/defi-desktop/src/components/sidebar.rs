//! # Sidebar Component
//!
//! Navigation sidebar for the application.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::NavHistory;

/// Navigation sidebar component.
///
/// Provides navigation links to the main application routes.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                "DeFi"
            }

            div {
                class: "nav-links",

                NavLink { to: Route::Home {}, label: "Home" }
                NavLink { to: Route::Wallets {}, label: "Wallets" }
                NavLink { to: Route::Settings {}, label: "Settings" }
            }
        }
    }
}

/// Sidebar link. Clicking the link of the current route counts as a new
/// navigation, so the page replays its fade.
#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    let current = use_route::<Route>();
    let mut history = use_context::<NavHistory>();
    let target = to.clone();

    rsx! {
        Link {
            to,
            class: "nav-link",
            onclick: move |_| {
                if current == target {
                    history.renavigate(&target.to_string());
                }
            },
            "{label}"
        }
    }
}
