//! Confirmation dialog

use crate::components::icons::AlertTriangleIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use dioxus::prelude::*;

/// Asks before a destructive step such as discarding unsaved edits.
///
/// Escape and backdrop clicks count as cancel.
#[component]
pub fn ConfirmDialogView(
    is_open: ReadSignal<bool>,
    title: String,
    message: String,
    #[props(default = "Continue".to_string())] confirm_label: String,
    #[props(default = "Keep Editing".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: move |_| on_cancel.call(()),
            div {
                class: "bg-gray-800 border border-gray-700 rounded-lg p-6 max-w-md w-full mx-4",
                role: "alertdialog",
                div { class: "flex items-start gap-3 mb-6",
                    AlertTriangleIcon { class: "w-6 h-6 text-amber-400 flex-shrink-0" }
                    div {
                        h2 { class: "text-lg font-semibold text-white mb-1", "{title}" }
                        p { class: "text-sm text-gray-300", "{message}" }
                    }
                }
                div { class: "flex gap-3 justify-end",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
