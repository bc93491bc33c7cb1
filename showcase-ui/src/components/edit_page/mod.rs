//! Edit-page views. Every input reports an [`EditChange`] to the owning page.
//!
//! [`EditChange`]: showcase_common::edit::EditChange

mod content_type;
mod custom_config;
mod external_url;
mod metadata;
mod page_selector;
mod save_actions;
mod view;

pub use content_type::EditContentTypeSelector;
pub use custom_config::CustomPageConfig;
pub use external_url::ExternalUrlConfig;
pub use metadata::PageMetadata;
pub use page_selector::PageSelector;
pub use save_actions::SaveActions;
pub use view::EditPageView;

use dioxus::prelude::*;

#[component]
fn Panel(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section { class: "bg-gray-900 border border-gray-800 rounded-lg p-6",
            div { class: "mb-6",
                h2 { class: "text-lg font-semibold text-white", "{title}" }
                p { class: "text-sm text-gray-400", "{subtitle}" }
            }
            div { class: "space-y-6", {children} }
        }
    }
}

#[component]
fn TipList(heading: String, tips: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "p-4 bg-blue-900/10 border border-blue-800/30 rounded-lg",
            h4 { class: "text-sm font-medium text-white mb-2", "{heading}" }
            ul { class: "space-y-1 text-xs text-gray-400",
                for tip in tips.iter() {
                    li { key: "{tip}", "• {tip}" }
                }
            }
        }
    }
}
