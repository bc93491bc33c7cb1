use crate::components::{SelectField, SelectOption};
use dioxus::prelude::*;
use showcase_common::catalog::EDITABLE_PAGES;

#[component]
pub fn PageSelector(selected: Option<String>, on_select: EventHandler<String>) -> Element {
    let options: Vec<SelectOption> = EDITABLE_PAGES
        .iter()
        .map(|p| SelectOption::new(p.id, p.name))
        .collect();

    rsx! {
        super::Panel {
            title: "Select Page",
            subtitle: "Choose which page you want to edit",
            SelectField {
                id: "edit-page-select",
                label: "Page",
                value: selected.unwrap_or_default(),
                options,
                placeholder: Some("Choose a page to edit...".to_string()),
                on_change: move |id: String| {
                    if !id.is_empty() {
                        on_select.call(id);
                    }
                },
            }
        }
    }
}
