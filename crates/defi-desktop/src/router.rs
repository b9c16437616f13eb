//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Shell;
use crate::views::{Home, Settings, WalletDetail, WalletSend, Wallets};

/// Application routes.
///
/// All routes render inside the [`Shell`] layout, which animates route
/// changes according to how deep the new path is compared to the last one.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Running shell wrapper for all routes.
    #[layout(Shell)]
    /// Dashboard with node status.
    #[route("/")]
    Home {},

    /// Wallet list.
    #[route("/wallets")]
    Wallets {},

    /// Single wallet.
    ///
    /// # Parameters
    ///
    /// * `id` - The wallet identifier
    #[route("/wallets/:id")]
    WalletDetail { id: String },

    /// Send form of a wallet.
    ///
    /// # Parameters
    ///
    /// * `id` - The wallet identifier
    #[route("/wallets/:id/send")]
    WalletSend { id: String },

    /// Node connection settings.
    #[route("/settings")]
    Settings {},
}
