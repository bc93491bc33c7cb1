use super::TipList;
use crate::components::icons::{AlertTriangleIcon, CheckCircleIcon, EyeIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, TextField};
use dioxus::prelude::*;
use showcase_common::catalog::SUGGESTED_URLS;
use showcase_common::edit::EditChange;

const TIPS: &[&str] = &[
    "Figma prototypes work best when shared with \"Anyone with the link can view\"",
    "Ensure external URLs support iframe embedding",
    "Test URLs in an incognito window to verify public accessibility",
    "Some websites may block iframe embedding for security reasons",
];

#[component]
pub fn ExternalUrlConfig(
    url: String,
    url_error: Option<String>,
    previewing: bool,
    preview_error: Option<String>,
    on_change: EventHandler<EditChange>,
    on_preview: EventHandler<()>,
) -> Element {
    let url_ok = !url.is_empty() && url_error.is_none();

    rsx! {
        super::Panel {
            title: "External URL Configuration",
            subtitle: "Configure external content integration",
            TextField {
                id: "edit-external-url",
                label: "External URL",
                input_type: "url",
                value: url.clone(),
                placeholder: Some("https://www.figma.com/proto/your-prototype-url".to_string()),
                description: Some("Enter the full URL to your external content (Figma prototype, website, etc.)".to_string()),
                error: url_error.clone(),
                required: true,
                on_input: move |v| on_change.call(EditChange::ExternalUrl(v)),
            }
            if url_ok {
                div { class: "flex items-center gap-2 text-sm text-green-400",
                    CheckCircleIcon { class: "w-4 h-4" }
                    "Valid URL format"
                }
            }
            div { class: "p-4 bg-gray-800/40 border border-gray-700 rounded-lg space-y-3",
                div { class: "flex items-center justify-between",
                    h3 { class: "font-medium text-white", "URL Preview" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        disabled: !url_ok,
                        loading: previewing,
                        onclick: move |_| on_preview.call(()),
                        EyeIcon { class: "w-4 h-4" }
                        "Preview"
                    }
                }
                if let Some(error) = preview_error {
                    div { class: "flex items-start gap-2 text-sm text-red-400", role: "alert",
                        AlertTriangleIcon { class: "w-4 h-4 mt-0.5 flex-shrink-0" }
                        span { "{error}" }
                    }
                }
                if url.is_empty() {
                    p { class: "text-sm text-gray-500 text-center py-4",
                        "Enter a URL above to preview the content"
                    }
                }
            }
            div {
                h3 { class: "font-medium text-white mb-3", "Quick Examples" }
                div { class: "space-y-2",
                    for suggestion in SUGGESTED_URLS.iter() {
                        button {
                            key: "{suggestion.url}",
                            r#type: "button",
                            class: "w-full text-left p-3 rounded-lg border border-gray-700 bg-gray-800/30 hover:bg-gray-800",
                            onclick: move |_| on_change.call(EditChange::ExternalUrl(suggestion.url.to_string())),
                            p { class: "text-sm font-medium text-white", "{suggestion.label}" }
                            p { class: "text-xs text-gray-400", "{suggestion.description}" }
                        }
                    }
                }
            }
            TipList { heading: "Configuration Tips", tips: TIPS }
        }
    }
}
