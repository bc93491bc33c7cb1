//! Error display component

use crate::components::icons::AlertTriangleIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Error box with optional retry and close actions
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default)] title: Option<String>,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_close: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center text-center gap-4 py-12 px-6",
            AlertTriangleIcon { class: "w-12 h-12 text-red-400" }
            if let Some(title) = title {
                h2 { class: "text-xl font-semibold text-white", "{title}" }
            }
            p { class: "text-gray-300 max-w-md", "{message}" }
            div { class: "flex gap-3",
                if let Some(on_retry) = on_retry {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_retry.call(()),
                        "Try Again"
                    }
                }
                if let Some(on_close) = on_close {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
