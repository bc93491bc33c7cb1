use crate::components::icons::{CheckIcon, LayoutGridIcon, SettingsIcon};
use dioxus::prelude::*;
use showcase_common::gallery::LayoutType;

/// Floating layout picker, rendered for admins only
#[component]
pub fn LayoutSelector(current: LayoutType, on_change: EventHandler<LayoutType>) -> Element {
    rsx! {
        div { class: "fixed top-20 right-4 z-40 bg-gray-900/95 border border-gray-700 rounded-lg p-4 shadow-lg w-64",
            div { class: "flex items-center gap-2 mb-3",
                SettingsIcon { class: "w-4 h-4 text-blue-400" }
                span { class: "text-sm font-medium text-white", "Layout Options" }
            }
            div { class: "space-y-2",
                for layout in LayoutType::ALL.iter().copied() {
                    button {
                        key: "{layout.name()}",
                        r#type: "button",
                        class: if layout == current { "w-full flex items-center gap-3 p-3 rounded-md text-left bg-blue-500/10 border border-blue-500 text-blue-400" } else { "w-full flex items-center gap-3 p-3 rounded-md text-left border border-transparent text-gray-400 hover:text-white hover:bg-gray-800" },
                        aria_pressed: layout == current,
                        onclick: move |_| on_change.call(layout),
                        LayoutGridIcon { class: "w-4 h-4 shrink-0" }
                        div { class: "flex-1 min-w-0",
                            div { class: "text-sm font-medium", "{layout.name()}" }
                            div { class: "text-xs opacity-80", "{layout.description()}" }
                        }
                        if layout == current {
                            CheckIcon { class: "w-4 h-4" }
                        }
                    }
                }
            }
            p { class: "mt-3 pt-3 border-t border-gray-700 text-xs text-gray-500",
                "Admin-only layout controls"
            }
        }
    }
}
