use super::section::SectionCard;
use crate::components::icons::CheckIcon;
use dioxus::prelude::*;
use showcase_common::page::{ContentType, PageEdit};

struct ContentTypeInfo {
    description: &'static str,
    features: &'static [&'static str],
    example: &'static str,
}

fn info(content_type: ContentType) -> ContentTypeInfo {
    match content_type {
        ContentType::VideoTemplate => ContentTypeInfo {
            description: "Create a gallery-style page with video thumbnails and player functionality",
            features: &[
                "Video thumbnail grid",
                "Full-screen video player",
                "Hover preview effects",
                "Mobile responsive design",
            ],
            example: "Perfect for showcasing UX process videos, case studies, or demo recordings",
        },
        ContentType::PrototypeTemplate => ContentTypeInfo {
            description: "Embed external prototypes and interactive designs from Figma or other tools",
            features: &[
                "Iframe embedding support",
                "Responsive scaling",
                "Full-screen viewing",
                "External link integration",
            ],
            example: "Ideal for displaying Figma prototypes, interactive mockups, or live demos",
        },
        ContentType::External => ContentTypeInfo {
            description: "Display content hosted on another site inside the portfolio frame",
            features: &["Any absolute http(s) URL", "Sandboxed embedding"],
            example: "Useful for live product demos or documentation sites",
        },
        ContentType::Custom => ContentTypeInfo {
            description: "A hand-built page configured from the edit page screen",
            features: &["Template and component selection", "Custom component props"],
            example: "For layouts the standard templates do not cover",
        },
    }
}

#[component]
pub fn ContentTypeSection(
    selected: Option<ContentType>,
    error: Option<String>,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    rsx! {
        SectionCard {
            title: "Content Type",
            subtitle: "Choose the template that best fits your content",
            div { class: "grid md:grid-cols-2 gap-6", role: "radiogroup",
                for content_type in ContentType::ALL.iter().copied() {
                    ContentTypeCard {
                        key: "{content_type.as_str()}",
                        content_type,
                        selected: selected == Some(content_type),
                        on_select: move |_| on_edit.call(PageEdit::ContentType(Some(content_type))),
                    }
                }
            }
            if let Some(error) = error {
                p { class: "text-sm text-red-400", role: "alert", "{error}" }
            }
        }
    }
}

#[component]
fn ContentTypeCard(content_type: ContentType, selected: bool, on_select: EventHandler<()>) -> Element {
    let info = info(content_type);
    let border = if selected {
        "border-blue-500 bg-blue-500/5"
    } else {
        "border-gray-700 hover:border-gray-500"
    };

    rsx! {
        button {
            r#type: "button",
            role: "radio",
            aria_checked: selected,
            class: "relative text-left border-2 rounded-lg p-6 transition-colors {border}",
            onclick: move |_| on_select.call(()),
            span { class: if selected { "absolute top-4 right-4 w-5 h-5 rounded-full border-2 border-blue-500 bg-blue-500 flex items-center justify-center" } else { "absolute top-4 right-4 w-5 h-5 rounded-full border-2 border-gray-500" },
                if selected {
                    span { class: "w-2 h-2 bg-white rounded-full" }
                }
            }
            div { class: "pr-8",
                h3 { class: "text-lg font-semibold text-white", "{content_type.label()}" }
                p { class: "text-sm text-gray-400 mb-4", "{info.description}" }
                h4 { class: "text-sm font-medium text-gray-200 mb-2", "Key Features:" }
                ul { class: "space-y-1 mb-4",
                    for feature in info.features.iter() {
                        li { key: "{feature}", class: "flex items-center gap-2 text-sm text-gray-400",
                            CheckIcon { class: "w-3.5 h-3.5 text-green-400" }
                            "{feature}"
                        }
                    }
                }
                p { class: "text-xs text-gray-500 italic", "{info.example}" }
            }
        }
    }
}
