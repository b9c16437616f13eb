//! # UI Components
//!
//! Components of the client's root shell.
//!
//! - [`Shell`] - Running shell layout around the routed pages
//! - [`Sidebar`] - Navigation sidebar
//! - [`TransitionGroup`] - Animated swap container for route content
//! - [`LaunchScreen`] - Shown until the node runs
//! - [`Loader`] - Spinner
//! - [`ErrorModal`] - Error popover inside the running shell
//! - [`UpdateProgressModal`] - Update overlay, always mounted

mod error_modal;
mod launch_screen;
mod loader;
mod shell;
mod sidebar;
mod transition_group;
mod update_progress;

pub use error_modal::ErrorModal;
pub use launch_screen::LaunchScreen;
pub use loader::Loader;
pub use shell::Shell;
pub use sidebar::Sidebar;
pub use transition_group::TransitionGroup;
pub use update_progress::UpdateProgressModal;
