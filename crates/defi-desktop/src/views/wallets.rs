//! # Wallet Views
//!
//! Wallet list, detail and send pages. Three levels deep so that moving
//! between them slides rather than fades.

use dioxus::prelude::*;

use crate::router::Route;

const DEFAULT_WALLET: &str = "default";

/// Wallet list view.
#[component]
pub fn Wallets() -> Element {
    rsx! {
        div {
            class: "wallets-view",

            h2 { "Wallets" }

            Link {
                to: Route::WalletDetail { id: DEFAULT_WALLET.to_string() },
                class: "wallet-card",
                "{DEFAULT_WALLET}"
            }
        }
    }
}

/// Single wallet view.
#[component]
pub fn WalletDetail(id: String) -> Element {
    rsx! {
        div {
            class: "wallet-view",

            Link { to: Route::Wallets {}, class: "btn-ghost", "Back" }

            h2 { "Wallet {id}" }

            Link {
                to: Route::WalletSend { id: id.clone() },
                class: "btn-primary",
                "Send"
            }
        }
    }
}

/// Send form of a wallet.
#[component]
pub fn WalletSend(id: String) -> Element {
    let mut address = use_signal(String::new);
    let mut amount = use_signal(String::new);

    rsx! {
        div {
            class: "send-view",

            Link { to: Route::WalletDetail { id: id.clone() }, class: "btn-ghost", "Back" }

            h2 { "Send from {id}" }

            label { "Address" }
            input {
                r#type: "text",
                value: "{address}",
                oninput: move |evt| address.set(evt.value()),
            }

            label { "Amount" }
            input {
                r#type: "text",
                value: "{amount}",
                oninput: move |evt| amount.set(evt.value()),
            }
        }
    }
}
