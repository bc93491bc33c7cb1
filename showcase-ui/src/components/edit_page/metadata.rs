use super::TipList;
use crate::components::{TextArea, TextField};
use dioxus::prelude::*;
use showcase_common::edit::{seo_preview_url, EditChange};
use showcase_common::page::{META_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

const TIPS: &[&str] = &[
    "Keep titles under 60 characters for optimal display",
    "Write compelling descriptions between 120-160 characters",
    "Use relevant keywords naturally in both title and description",
    "Make titles and descriptions unique for each page",
];

#[component]
pub fn PageMetadata(
    title: String,
    description: String,
    last_modified: Option<String>,
    modified_by: Option<String>,
    public_base_url: String,
    on_change: EventHandler<EditChange>,
) -> Element {
    let seo_url = seo_preview_url(&public_base_url, &title);
    let seo_title = if title.is_empty() { "Page Title".to_string() } else { title.clone() };
    let seo_description = if description.is_empty() {
        "Page description will appear here...".to_string()
    } else {
        description.clone()
    };

    rsx! {
        super::Panel {
            title: "Page Metadata",
            subtitle: "Configure page title, description, and SEO settings",
            TextField {
                id: "edit-page-title",
                label: "Page Title",
                value: title,
                placeholder: Some("Enter page title...".to_string()),
                description: Some("This title will appear in the browser tab and navigation".to_string()),
                required: true,
                max_chars: Some(TITLE_MAX_CHARS),
                on_input: move |v| on_change.call(EditChange::Title(v)),
            }
            TextArea {
                id: "edit-page-description",
                label: "Page Description",
                value: description,
                placeholder: Some("Enter a brief description of this page...".to_string()),
                description: Some("Used for SEO and page previews. Recommended length: 120-160 characters.".to_string()),
                max_chars: Some(META_DESCRIPTION_MAX_CHARS),
                on_input: move |v| on_change.call(EditChange::Description(v)),
            }
            if last_modified.is_some() || modified_by.is_some() {
                div { class: "p-4 bg-gray-800/40 border border-gray-700 rounded-lg space-y-2",
                    h3 { class: "font-medium text-white", "Version Information" }
                    if let Some(when) = last_modified {
                        div {
                            p { class: "text-sm text-white", "Last Modified" }
                            p { class: "text-xs text-gray-400", "{when}" }
                        }
                    }
                    if let Some(who) = modified_by {
                        div {
                            p { class: "text-sm text-white", "Modified By" }
                            p { class: "text-xs text-gray-400", "{who}" }
                        }
                    }
                }
            }
            div {
                h3 { class: "font-medium text-white mb-3", "SEO Preview" }
                div { class: "p-4 bg-white rounded-lg space-y-1",
                    p { class: "text-blue-700 text-lg truncate", "{seo_title}" }
                    p { class: "text-green-700 text-sm truncate", "{seo_url}" }
                    p { class: "text-gray-600 text-sm line-clamp-2", "{seo_description}" }
                }
            }
            TipList { heading: "SEO Best Practices", tips: TIPS }
        }
    }
}
