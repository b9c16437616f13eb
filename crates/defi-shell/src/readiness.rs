//! Projection of process-wide application state onto a view mode.

use serde::{Deserialize, Serialize};

/// Root class applied to the running shell while a modal is open.
pub const MODAL_OPEN_CLASS: &str = "open-error-modal";

/// Application state read once per render.
///
/// Owned and mutated by external collaborators (node status polling, RPC
/// bootstrap, modal controllers). The shell only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessState {
    /// Whether the node reports itself as running.
    pub is_running: bool,
    /// Last node error, shown verbatim on the launch screen.
    #[serde(default)]
    pub node_error: String,
    /// Whether the RPC configuration is being fetched.
    pub is_fetching: bool,
    /// Whether the error modal is open.
    pub is_error_modal_open: bool,
    /// Whether the update modal is open.
    pub is_update_modal_open: bool,
}

impl ReadinessState {
    fn any_modal_open(&self) -> bool {
        self.is_error_modal_open || self.is_update_modal_open
    }
}

/// The launch screen shown until the node runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchView {
    /// Message shown under the spinner, empty when there is nothing to say.
    pub message: String,
    /// Whether the loading indicator spins.
    pub loading: bool,
}

/// The running application shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningShell {
    /// Whether an error or update modal is open over the shell.
    pub modal_open: bool,
}

impl RunningShell {
    /// Whether the sidebar and route content must ignore input and focus.
    ///
    /// The error modal slot stays interactive.
    #[must_use]
    pub fn background_inert(&self) -> bool {
        self.modal_open
    }

    /// Class of the shell's root container.
    #[must_use]
    pub fn root_class(&self) -> &'static str {
        if self.modal_open {
            MODAL_OPEN_CLASS
        } else {
            ""
        }
    }
}

/// Which of the mutually exclusive views to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// Node not running yet, or failed to start.
    Launch(LaunchView),
    /// Node running; sidebar, routed content and the error modal slot.
    Running(RunningShell),
}

impl ViewMode {
    /// Whether this is the running shell.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Everything the host mounts for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// The selected view.
    pub mode: ViewMode,
    /// Whether the update-progress overlay is mounted. Always true: updates
    /// can be in progress before the node reports running.
    pub update_overlay: bool,
}

/// Projects `state` onto the view to render.
#[must_use]
pub fn view_mode(state: &ReadinessState) -> ViewMode {
    if state.is_running {
        ViewMode::Running(RunningShell {
            modal_open: state.any_modal_open(),
        })
    } else {
        ViewMode::Launch(LaunchView {
            message: state.node_error.clone(),
            loading: state.is_fetching,
        })
    }
}

/// Builds the full render plan for `state`.
#[must_use]
pub fn render_plan(state: &ReadinessState) -> RenderPlan {
    RenderPlan {
        mode: view_mode(state),
        update_overlay: true,
    }
}
