//! Read-only rendering of a create-page draft opened from the preview action

use crate::components::icons::{EyeIcon, VideoIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use showcase_common::page::{ContentType, PreviewData, TemplateConfig};
use showcase_common::prototype::FRAME_SANDBOX;

#[component]
fn EmbeddedUrl(url: String, title: String, height: String) -> Element {
    if url.trim().is_empty() {
        return rsx! {
            p { class: "text-gray-400 text-center py-12", "No URL configured for this page yet." }
        };
    }
    rsx! {
        iframe {
            class: "w-full rounded-lg border border-gray-800 bg-white",
            style: "height: {height}px;",
            src: "{url}",
            title: "{title}",
            "sandbox": FRAME_SANDBOX,
            allow: "fullscreen",
        }
    }
}

#[component]
fn VideoTemplateSummary(template: TemplateConfig) -> Element {
    let duration = if template.show_duration { "Shown" } else { "Hidden" };
    rsx! {
        div { class: "grid sm:grid-cols-2 gap-4",
            for n in 0..4u32 {
                div {
                    key: "{n}",
                    class: "flex items-center justify-center bg-gray-800 rounded-lg text-gray-500",
                    style: "height: {template.thumbnail_height}px;",
                    VideoIcon { class: "w-10 h-10" }
                }
            }
        }
        dl { class: "mt-6 grid grid-cols-2 gap-2 text-sm",
            dt { class: "text-gray-400", "Layout" }
            dd { class: "text-white", "{template.grid_layout.label()}" }
            dt { class: "text-gray-400", "Aspect Ratio" }
            dd { class: "text-white", "{template.aspect_ratio.label()}" }
            dt { class: "text-gray-400", "Durations" }
            dd { class: "text-white", "{duration}" }
        }
    }
}

#[component]
pub fn PreviewView(slug: String, data: Option<PreviewData>, on_close: EventHandler<()>) -> Element {
    let Some(data) = data else {
        return rsx! {
            div { class: "min-h-screen bg-black flex flex-col items-center justify-center gap-4 px-6 text-center",
                EyeIcon { class: "w-12 h-12 text-gray-600" }
                h1 { class: "text-2xl font-semibold text-white", "Preview Unavailable" }
                p { class: "text-gray-400 max-w-md",
                    "No preview data was found for \"{slug}\". Open the preview again from the page editor."
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_close.call(()),
                    "Close Preview"
                }
            }
        };
    };

    let kind = data.content_type.map(|c| c.label()).unwrap_or("No content type");

    rsx! {
        div { class: "min-h-screen bg-black",
            div { class: "sticky top-0 z-10 bg-amber-500 text-black px-4 py-2 flex items-center justify-between",
                div { class: "flex items-center gap-2 text-sm font-medium",
                    EyeIcon { class: "w-4 h-4" }
                    "Preview Mode: this page is not published"
                }
                button {
                    r#type: "button",
                    class: "p-1 rounded hover:bg-black/10",
                    aria_label: "Close preview",
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
            main { class: "max-w-6xl mx-auto px-4 sm:px-6 py-10 space-y-6",
                div {
                    h1 { class: "text-3xl font-bold text-white", "{data.title}" }
                    p { class: "text-sm text-gray-500 font-mono mt-1", "/portfolio/{data.slug}" }
                    span { class: "inline-block mt-3 px-2 py-0.5 rounded-md bg-gray-800 text-xs text-gray-300",
                        "{kind}"
                    }
                }
                match data.content_type {
                    Some(ContentType::VideoTemplate) => rsx! {
                        VideoTemplateSummary { template: data.template.clone() }
                    },
                    Some(ContentType::PrototypeTemplate) => rsx! {
                        EmbeddedUrl {
                            url: data.template.prototype_url.clone(),
                            title: data.title.clone(),
                            height: data.template.container_height.clone(),
                        }
                    },
                    Some(ContentType::External) => rsx! {
                        EmbeddedUrl {
                            url: data.template.external_url.clone(),
                            title: data.title.clone(),
                            height: data.template.container_height.clone(),
                        }
                    },
                    Some(ContentType::Custom) | None => rsx! {
                        p { class: "text-gray-400",
                            "Custom pages are rendered by their own component once published."
                        }
                    },
                }
            }
        }
    }
}
