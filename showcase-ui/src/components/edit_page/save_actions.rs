use crate::components::icons::{EyeIcon, SaveIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ErrorBanner, SuccessBanner};
use dioxus::prelude::*;

#[component]
pub fn SaveActions(
    saving: bool,
    has_unsaved_changes: bool,
    save_error: Option<String>,
    success: Option<String>,
    on_save: EventHandler<()>,
    on_save_and_preview: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_dismiss_success: EventHandler<()>,
) -> Element {
    rsx! {
        super::Panel {
            title: "Save Changes",
            subtitle: "Save your edits or preview them live",
            if has_unsaved_changes {
                div { class: "flex items-center gap-2 text-sm text-amber-400",
                    span { class: "w-2 h-2 rounded-full bg-amber-400" }
                    "You have unsaved changes"
                }
            }
            if let Some(error) = save_error {
                ErrorBanner {
                    heading: "Save Failed",
                    detail: error,
                    button_label: "Try Again",
                    on_retry: move |_| on_save.call(()),
                }
            }
            if let Some(message) = success {
                SuccessBanner { message, on_dismiss: move |_| on_dismiss_success.call(()) }
            }
            div { class: "space-y-3",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    full_width: true,
                    disabled: !has_unsaved_changes,
                    loading: saving,
                    onclick: move |_| on_save.call(()),
                    SaveIcon { class: "w-4 h-4" }
                    if saving { "Saving..." } else { "Save Changes" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Medium,
                    full_width: true,
                    disabled: saving,
                    onclick: move |_| on_save_and_preview.call(()),
                    EyeIcon { class: "w-4 h-4" }
                    "Save & Preview"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Medium,
                    full_width: true,
                    disabled: saving,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
            div { class: "text-xs text-gray-500 space-y-1",
                p { class: "font-medium text-gray-400", "Keyboard Shortcuts" }
                p { "Ctrl/Cmd + S to save" }
                p { "Ctrl/Cmd + P to save and preview" }
            }
        }
    }
}
