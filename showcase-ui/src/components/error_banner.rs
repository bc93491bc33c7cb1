//! Banners for simulated request failures and flash messages

use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

/// Amber banner for a failed simulated request, with a retry action
#[component]
pub fn ErrorBanner(
    heading: String,
    detail: String,
    #[props(default = "Retry".to_string())] button_label: String,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4",
            role: "alert",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-200 mb-1", "{heading}" }
                    p { class: "text-sm text-gray-400 break-words", "{detail}" }
                    div { class: "mt-3",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            onclick: move |_| on_retry.call(()),
                            "{button_label}"
                        }
                    }
                }
            }
        }
    }
}

/// Inline green confirmation, e.g. "Page saved successfully"
#[component]
pub fn SuccessBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "bg-green-900/30 border border-green-700/50 rounded-lg px-4 py-3 flex items-center gap-3",
            role: "status",
            CheckCircleIcon { class: "w-5 h-5 text-green-400 flex-shrink-0" }
            p { class: "flex-1 text-sm text-green-200", "{message}" }
            ChromelessButton {
                class: Some("text-green-300 hover:text-white".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(()),
                XIcon { class: "w-4 h-4" }
            }
        }
    }
}
