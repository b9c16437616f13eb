//! # Shell Component
//!
//! The running application shell around the routed pages.

use dioxus::prelude::*;

use defi_shell::{RunningShell, ViewMode};

use super::{ErrorModal, Sidebar, TransitionGroup};
use crate::router::Route;
use crate::state::{AppState, GateHandle, NavHistory};

/// Running shell layout component.
///
/// Renders the sidebar, the routed page inside the animated swap container,
/// and the error modal slot. While a modal is open the sidebar and page are
/// made `inert`; the modal slot stays interactive.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | #app                                        |
/// | +---------+-------------------------------+ |
/// | | Sidebar |  TransitionGroup              | |
/// | |         |    (Outlet)                   | |
/// | +---------+-------------------------------+ |
/// |  ErrorModal                                 |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Shell() -> Element {
    let state = use_context::<AppState>();
    let gate = use_context::<GateHandle>();
    let route = use_route::<Route>();
    let history = use_context_provider(NavHistory::new);

    let running = match gate.render(&state.readiness()).mode {
        ViewMode::Running(running) => running,
        ViewMode::Launch(_) => RunningShell::default(),
    };

    // Read the depth memory for this pass; it is written back only after
    // the pass has rendered.
    let outcome = history.observe(&*gate.get(), &route.to_string());

    let rendered = outcome.as_ref().ok().map(|(_, pending)| *pending);
    let committer = gate.clone();
    use_effect(use_reactive((&rendered,), move |(rendered,)| {
        if let Some(pending) = rendered {
            committer.get_mut().commit(pending);
        }
    }));

    let (key, pending) = outcome?;

    let inert = running.background_inert().then_some("true");

    rsx! {
        div {
            id: "app",
            class: "{running.root_class()}",

            div {
                class: "app-layout",
                "inert": inert,
                "aria-hidden": inert,

                Sidebar {}

                main {
                    class: "content",

                    TransitionGroup {
                        decision: pending.decision(),
                        swap_key: key,
                        Outlet::<Route> {}
                    }
                }
            }

            ErrorModal {}
        }
    }
}
