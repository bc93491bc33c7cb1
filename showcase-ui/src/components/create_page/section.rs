use crate::components::SelectOption;
use dioxus::prelude::*;

/// Card with a heading row shared by every form section
#[component]
pub(super) fn SectionCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section { class: "bg-gray-900 border border-gray-800 rounded-lg p-6",
            div { class: "mb-6",
                h2 { class: "text-xl font-semibold text-white", "{title}" }
                p { class: "text-sm text-gray-400", "{subtitle}" }
            }
            div { class: "space-y-6", {children} }
        }
    }
}

#[component]
pub(super) fn SubHeading(text: String) -> Element {
    rsx! {
        h4 { class: "text-sm font-medium text-gray-200", "{text}" }
    }
}

/// Select options for one of the string-backed option enums
pub(super) fn enum_options<T>(
    all: &[T],
    value: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter()
        .map(|item| SelectOption::new(value(item), label(item)))
        .collect()
}
