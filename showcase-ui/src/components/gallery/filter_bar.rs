use crate::components::icons::{RefreshIcon, SearchIcon, VideoIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, SelectField, SelectOption};
use dioxus::prelude::*;
use showcase_common::catalog::CATEGORIES;
use showcase_common::gallery::{GalleryQuery, SortOrder, ALL_CATEGORIES};

/// Categories offered as one-click pills next to the result count
const QUICK_PILLS: usize = 4;

fn category_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_CATEGORIES, "All Categories"))
        .chain(CATEGORIES.iter().map(|c| SelectOption::new(c.id, c.name)))
        .collect()
}

fn sort_options() -> Vec<SelectOption> {
    SortOrder::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

#[component]
pub fn FilterBar(
    query: GalleryQuery,
    result_count: usize,
    on_search: EventHandler<String>,
    on_category: EventHandler<String>,
    on_sort: EventHandler<SortOrder>,
    on_clear: EventHandler<()>,
) -> Element {
    let filtered = query.category != ALL_CATEGORIES || !query.search.is_empty();
    let summary = query.summary(result_count);

    rsx! {
        div { class: "bg-gray-900/50 border border-gray-800 rounded-lg p-4 mb-8",
            div { class: "flex flex-col lg:flex-row lg:items-end lg:justify-between gap-4",
                div { class: "flex-1 max-w-md relative",
                    SearchIcon { class: "w-5 h-5 absolute left-3 top-1/2 -translate-y-1/2 text-gray-500" }
                    input {
                        r#type: "text",
                        class: "w-full pl-10 pr-10 py-2 bg-gray-800/50 border border-gray-700 rounded-md text-gray-200 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500",
                        placeholder: "Search videos...",
                        aria_label: "Search videos",
                        value: "{query.search}",
                        oninput: move |e| on_search.call(e.value()),
                    }
                    if !query.search.is_empty() {
                        button {
                            r#type: "button",
                            class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 hover:text-white",
                            aria_label: "Clear search",
                            onclick: move |_| on_search.call(String::new()),
                            XIcon { class: "w-4 h-4" }
                        }
                    }
                }
                div { class: "flex flex-col sm:flex-row sm:items-end gap-3",
                    div { class: "min-w-[180px]",
                        SelectField {
                            id: "gallery-category",
                            label: "Category",
                            value: query.category.clone(),
                            options: category_options(),
                            on_change: move |value| on_category.call(value),
                        }
                    }
                    div { class: "min-w-[160px]",
                        SelectField {
                            id: "gallery-sort",
                            label: "Sort by",
                            value: query.sort.as_str().to_string(),
                            options: sort_options(),
                            on_change: move |value: String| {
                                if let Some(sort) = SortOrder::parse(&value) {
                                    on_sort.call(sort);
                                }
                            },
                        }
                    }
                    if filtered {
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| on_clear.call(()),
                            RefreshIcon { class: "w-4 h-4" }
                            "Clear"
                        }
                    }
                }
            }
            div { class: "flex items-center justify-between mt-4 pt-4 border-t border-gray-800",
                div { class: "flex items-center gap-2 text-sm text-gray-400",
                    VideoIcon { class: "w-4 h-4" }
                    span { "{summary}" }
                }
                div { class: "hidden md:flex items-center gap-2",
                    for category in CATEGORIES.iter().take(QUICK_PILLS) {
                        button {
                            key: "{category.id}",
                            r#type: "button",
                            class: if query.category == category.id { "px-3 py-1 rounded-full text-xs font-medium bg-blue-600 text-white" } else { "px-3 py-1 rounded-full text-xs font-medium bg-gray-800 text-gray-400 hover:text-white" },
                            onclick: move |_| on_category.call(category.id.to_string()),
                            "{category.name}"
                        }
                    }
                }
            }
        }
    }
}
