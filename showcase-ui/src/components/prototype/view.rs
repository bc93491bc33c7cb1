use super::PrototypeFrame;
use crate::components::icons::{
    CalendarIcon, ChevronRightIcon, ExternalLinkIcon, EyeIcon, InfoIcon, MaximizeIcon, TagIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::wasm_utils::{open_in_new_tab, toggle_fullscreen};
use dioxus::prelude::*;
use showcase_common::catalog::PrototypeInfo;
use showcase_common::prototype::external_link;

pub const PROTOTYPE_CONTAINER_ID: &str = "prototype-viewer";
const PROTOTYPE_ROUTE: &str = "/figma-prototype-display";

const BREADCRUMBS: &[(&str, &str)] = &[("Home", "/home-video-gallery"), ("Vision", PROTOTYPE_ROUTE)];

fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "live" => "text-green-400 bg-green-500/10",
        "draft" => "text-amber-400 bg-amber-500/10",
        _ => "text-gray-400 bg-gray-500/10",
    }
}

#[component]
fn Breadcrumbs(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        nav { class: "bg-gray-900 border-b border-gray-800 px-6 py-3", aria_label: "Breadcrumb",
            ol { class: "flex items-center gap-2 text-sm",
                for (index, (label, path)) in BREADCRUMBS.iter().enumerate() {
                    li { key: "{path}", class: "flex items-center gap-2",
                        if index > 0 {
                            ChevronRightIcon { class: "w-4 h-4 text-gray-600" }
                        }
                        a {
                            href: "{path}",
                            class: if *path == PROTOTYPE_ROUTE { "px-2 py-1 rounded-md text-blue-400 bg-blue-500/10" } else { "px-2 py-1 rounded-md text-gray-400 hover:text-white hover:bg-gray-800" },
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_navigate.call(path.to_string());
                            },
                            if *path == PROTOTYPE_ROUTE {
                                EyeIcon { class: "w-3.5 h-3.5 inline mr-1" }
                            }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Prototype page: breadcrumb, title bar, frame and info footer.
///
/// Chrome around the frame hides while it is fullscreen.
#[component]
pub fn PrototypeView(info: PrototypeInfo, on_navigate: EventHandler<String>) -> Element {
    let mut fullscreen = use_signal(|| false);
    let external = external_link(info.url);
    let has_url = !info.url.is_empty();
    let updated = info.last_updated_label();
    let status_style = status_class(info.status);

    rsx! {
        div { class: if fullscreen() { "flex flex-col h-screen" } else { "flex flex-col min-h-screen pt-16" },
            if !fullscreen() {
                Breadcrumbs { on_navigate }
                div { class: "bg-gray-900 border-b border-gray-800 px-6 py-4",
                    div { class: "flex items-center justify-between gap-6",
                        div { class: "flex-1",
                            h1 { class: "text-2xl font-bold text-white mb-2", "{info.title}" }
                            if !info.description.is_empty() {
                                p { class: "text-sm text-gray-400 leading-relaxed", "{info.description}" }
                            }
                        }
                        div { class: "flex items-center gap-3",
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Small,
                                disabled: !has_url,
                                onclick: move |_| open_in_new_tab(&external),
                                ExternalLinkIcon { class: "w-4 h-4" }
                                "Open in Figma"
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                size: ButtonSize::Small,
                                onclick: move |_| toggle_fullscreen(PROTOTYPE_CONTAINER_ID),
                                MaximizeIcon { class: "w-4 h-4" }
                                "Fullscreen"
                            }
                        }
                    }
                }
            }
            PrototypeFrame {
                container_id: PROTOTYPE_CONTAINER_ID.to_string(),
                src: info.url.to_string(),
                title: info.title.to_string(),
                on_fullscreen_change: move |on| fullscreen.set(on),
            }
            if !fullscreen() {
                div { class: "bg-gray-900 border-t border-gray-800 px-6 py-4",
                    div { class: "flex items-center justify-between text-sm",
                        div { class: "flex items-center gap-6",
                            div { class: "flex items-center gap-2 text-gray-400",
                                CalendarIcon { class: "w-4 h-4" }
                                span { "Updated {updated}" }
                            }
                            div { class: "flex items-center gap-2 text-gray-400",
                                TagIcon { class: "w-4 h-4" }
                                span { "{info.version}" }
                            }
                            div { class: "flex items-center gap-2 px-2 py-1 rounded-md text-xs font-medium {status_style}",
                                div { class: "w-2 h-2 rounded-full bg-current" }
                                span { "{info.status}" }
                            }
                        }
                        div { class: "hidden sm:flex items-center gap-2 text-gray-400",
                            InfoIcon { class: "w-4 h-4" }
                            span { "Interactive Figma Prototype" }
                        }
                    }
                }
            }
        }
    }
}
