use crate::components::icons::{AlertTriangleIcon, ArrowLeftIcon, RefreshIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

const TIPS: &[&str] = &[
    "Check your internet connection",
    "Refresh the page and try again",
    "Ensure the video URL is valid and accessible",
    "Try a different browser if the issue persists",
];

/// Full-screen "Video Unavailable" view with retry and back actions
#[component]
pub fn VideoErrorView(
    message: String,
    on_retry: EventHandler<()>,
    on_close: EventHandler<()>,
    #[props(default = true)] show_retry: bool,
) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-50 bg-black flex items-center justify-center",
            div { class: "text-center text-white max-w-md mx-auto px-6",
                AlertTriangleIcon { class: "w-16 h-16 mx-auto mb-6 text-amber-400" }
                h2 { class: "text-2xl font-semibold mb-4", "Video Unavailable" }
                p { class: "text-gray-300 mb-2", "{message}" }
                p { class: "text-sm text-gray-400 mb-8",
                    "This could be due to network issues, an invalid video URL, or the video file may no longer be available."
                }
                div { class: "flex flex-col sm:flex-row gap-4 justify-center",
                    if show_retry {
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_retry.call(()),
                            RefreshIcon { class: "w-4 h-4" }
                            "Try Again"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_close.call(()),
                        ArrowLeftIcon { class: "w-4 h-4" }
                        "Go Back"
                    }
                }
                div { class: "mt-8 text-left bg-gray-900/50 rounded-lg p-4",
                    h3 { class: "text-sm font-semibold mb-3", "Troubleshooting Tips" }
                    ul { class: "text-xs text-gray-400 space-y-1",
                        for tip in TIPS.iter() {
                            li { key: "{tip}", "• {tip}" }
                        }
                    }
                }
            }
            ChromelessButton {
                class: Some("absolute top-6 right-6 p-3 bg-black/70 hover:bg-black/90 rounded-full text-white".to_string()),
                aria_label: Some("Close video player".to_string()),
                onclick: move |_| on_close.call(()),
                XIcon { class: "w-6 h-6" }
            }
        }
    }
}
