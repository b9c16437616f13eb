//! # Loader Component
//!
//! Circular spinner.

use dioxus::prelude::*;

/// Spinner color when none is given.
pub const DEFAULT_COLOR: &str = "#000000";

/// Width of the spinner ring in pixels.
pub const BORDER_SIZE: u32 = 6;

/// Spinning ring of `size` pixels.
#[component]
pub fn Loader(
    size: u32,
    #[props(into)] color: Option<String>,
    #[props(into)] class: Option<String>,
) -> Element {
    let color = color.unwrap_or_else(|| DEFAULT_COLOR.to_string());
    let class = class.unwrap_or_default();

    rsx! {
        div {
            class: "{class}",

            div {
                class: "spinner",
                style: "width: {size}px; height: {size}px; border: {BORDER_SIZE}px solid {color}; border-top-color: transparent;",
            }
        }
    }
}
