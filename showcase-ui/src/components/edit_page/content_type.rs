use dioxus::prelude::*;
use showcase_common::edit::{EditChange, EditContentType};

#[component]
pub fn EditContentTypeSelector(
    selected: EditContentType,
    disabled: bool,
    on_change: EventHandler<EditChange>,
) -> Element {
    rsx! {
        super::Panel {
            title: "Content Type",
            subtitle: "Choose how this page displays its content",
            div { class: "grid sm:grid-cols-2 gap-4", role: "radiogroup",
                for kind in EditContentType::ALL.iter().copied() {
                    button {
                        key: "{kind.label()}",
                        r#type: "button",
                        role: "radio",
                        aria_checked: kind == selected,
                        disabled,
                        class: if kind == selected { "text-left p-4 rounded-lg border border-blue-500 bg-blue-500/10" } else { "text-left p-4 rounded-lg border border-gray-700 hover:border-gray-500 disabled:opacity-50" },
                        onclick: move |_| on_change.call(EditChange::ContentType(kind)),
                        p { class: "font-medium text-white", "{kind.label()}" }
                        p { class: "text-sm text-gray-400 mt-1", "{kind.description()}" }
                    }
                }
            }
        }
    }
}
