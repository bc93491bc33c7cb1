use super::section::SectionCard;
use crate::components::{TextArea, TextField};
use dioxus::prelude::*;
use showcase_common::page::{PageConfig, PageEdit, META_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use showcase_common::validation::{Field, ValidationErrors};

#[component]
pub fn PageSetupSection(
    page: PageConfig,
    errors: ValidationErrors,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    let preview_path = page.preview_path();
    let slug_hint = if page.slug.is_user_edited() {
        "Custom slug. Clear the field to follow the title again"
    } else {
        "Auto-generated from title, customize if needed"
    };

    rsx! {
        SectionCard {
            title: "Page Setup",
            subtitle: "Configure basic page information and SEO settings",
            TextField {
                id: "page-title",
                label: "Page Title",
                value: page.title.clone(),
                placeholder: Some("Enter page title (e.g., 'Mobile App Design')".to_string()),
                description: Some("This will appear in navigation and browser tabs".to_string()),
                error: errors.get(Field::Title).map(str::to_string),
                required: true,
                max_chars: Some(TITLE_MAX_CHARS),
                on_input: move |v| on_edit.call(PageEdit::Title(v)),
            }
            div {
                TextField {
                    id: "page-slug",
                    label: "URL Slug",
                    value: page.slug.value().to_string(),
                    placeholder: Some("page-url-slug".to_string()),
                    description: Some(slug_hint.to_string()),
                    error: errors.get(Field::Slug).map(str::to_string),
                    required: true,
                    on_input: move |v| on_edit.call(PageEdit::Slug(v)),
                }
                p { class: "mt-2 text-xs text-gray-500 font-mono", "Preview: {preview_path}" }
            }
            TextArea {
                id: "page-meta-description",
                label: "Meta Description",
                value: page.meta_description.clone(),
                rows: 3,
                placeholder: Some("Brief description for search engines and social media previews...".to_string()),
                description: Some("Recommended: 150-160 characters for optimal SEO".to_string()),
                error: errors.get(Field::MetaDescription).map(str::to_string),
                max_chars: Some(META_DESCRIPTION_MAX_CHARS),
                on_input: move |v| on_edit.call(PageEdit::MetaDescription(v)),
            }
        }
    }
}
