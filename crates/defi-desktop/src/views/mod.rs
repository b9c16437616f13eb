//! # Views
//!
//! Page-level view components rendered inside the running shell.
//!
//! - [`Home`] - Node status dashboard
//! - [`Wallets`] - Wallet list
//! - [`WalletDetail`] - Single wallet
//! - [`WalletSend`] - Send form
//! - [`Settings`] - Node connection settings

mod home;
mod settings;
mod wallets;

pub use home::Home;
pub use settings::Settings;
pub use wallets::{WalletDetail, WalletSend, Wallets};
