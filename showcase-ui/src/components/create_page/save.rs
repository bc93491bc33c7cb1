use super::section::SectionCard;
use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon, EyeIcon, SaveIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::stores::SaveAction;
use dioxus::prelude::*;
use showcase_common::validation::ValidationErrors;

#[component]
pub fn SavePublishSection(
    errors: ValidationErrors,
    can_publish: bool,
    pending: Option<SaveAction>,
    on_save_draft: EventHandler<()>,
    on_publish: EventHandler<()>,
    on_preview: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut show_details = use_signal(|| false);
    let has_errors = !errors.is_empty();
    let busy = pending.is_some();
    let publish_blocked = !can_publish || has_errors || busy;
    let issue_count = errors.len();

    rsx! {
        SectionCard {
            title: "Save & Publish",
            subtitle: "Review your page and choose how to save it",
            if has_errors {
                div { class: "p-4 bg-red-900/20 border border-red-700/50 rounded-lg", role: "alert",
                    div { class: "flex items-center justify-between",
                        div { class: "flex items-center gap-2",
                            AlertTriangleIcon { class: "w-5 h-5 text-red-400" }
                            span { class: "text-sm font-medium text-red-200",
                                "Validation Issues Found ({issue_count})"
                            }
                        }
                        ChromelessButton {
                            class: Some("text-xs text-red-300 hover:text-white underline".to_string()),
                            onclick: move |_| show_details.toggle(),
                            if show_details() { "Hide Details" } else { "Show Details" }
                        }
                    }
                    if show_details() {
                        ul { class: "mt-3 space-y-1 text-sm text-red-300 list-disc list-inside",
                            for (field, message) in errors.iter() {
                                li { key: "{field.key()}",
                                    span { class: "font-medium", "{field.label()}: " }
                                    "{message}"
                                }
                            }
                        }
                    }
                }
            } else if can_publish {
                div { class: "p-4 bg-green-900/20 border border-green-700/50 rounded-lg flex items-center gap-2",
                    role: "status",
                    CheckCircleIcon { class: "w-5 h-5 text-green-400" }
                    span { class: "text-sm font-medium text-green-200", "Page Ready to Publish" }
                }
            }
            div { class: "flex flex-col sm:flex-row flex-wrap gap-3",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: publish_blocked,
                    loading: pending == Some(SaveAction::Publish),
                    onclick: move |_| on_publish.call(()),
                    if pending == Some(SaveAction::Publish) { "Publishing..." } else { "Publish Page" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    disabled: busy,
                    loading: pending == Some(SaveAction::Draft),
                    onclick: move |_| on_save_draft.call(()),
                    SaveIcon { class: "w-4 h-4" }
                    if pending == Some(SaveAction::Draft) { "Saving..." } else { "Save as Draft" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Medium,
                    disabled: busy,
                    onclick: move |_| on_preview.call(()),
                    EyeIcon { class: "w-4 h-4" }
                    "Preview Page"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Medium,
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel & Go Back"
                }
            }
            div { class: "text-xs text-gray-500 space-y-1",
                p { "Drafts are saved without publishing and can be edited later." }
                p { "Published pages go live immediately at their URL slug." }
                if can_publish && !has_errors {
                    p { class: "text-green-400", "All required fields are complete." }
                }
            }
        }
    }
}
