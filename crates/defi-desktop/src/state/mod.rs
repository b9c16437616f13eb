//! # State Management
//!
//! Global application state, the readiness gate handle and the shell's
//! navigation history.

mod app_state;
mod gate;
mod navigation;

pub use app_state::AppState;
pub use gate::GateHandle;
pub use navigation::NavHistory;
