use super::TipList;
use crate::components::icons::{PlusIcon, SettingsIcon, TrashIcon};
use crate::components::{
    Button, ButtonSize, ButtonVariant, ChromelessButton, SelectField, SelectOption, TextField,
};
use dioxus::prelude::*;
use showcase_common::edit::{CustomProp, EditChange, PageTemplate, PropField, PropType};

const TIPS: &[&str] = &[
    "Use PascalCase for component names (e.g., MyCustomComponent)",
    "Properties are passed to your component when it renders",
    "Templates provide pre-built layouts that you can customize",
];

const CELL_INPUT: &str = "w-full bg-gray-800/50 border border-gray-700 rounded-md px-2 py-1.5 text-sm text-gray-200";

#[component]
fn PropRow(index: usize, prop: CustomProp, on_change: EventHandler<EditChange>) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            div { class: "grid grid-cols-3 gap-2 flex-1",
                input {
                    class: CELL_INPUT,
                    placeholder: "Property name",
                    aria_label: "Property name",
                    value: "{prop.key}",
                    oninput: move |e| on_change.call(EditChange::UpdateProp(index, PropField::Key, e.value())),
                }
                input {
                    class: CELL_INPUT,
                    placeholder: "Default value",
                    aria_label: "Default value",
                    value: "{prop.value}",
                    oninput: move |e| on_change.call(EditChange::UpdateProp(index, PropField::Value, e.value())),
                }
                select {
                    class: CELL_INPUT,
                    aria_label: "Type",
                    onchange: move |e| {
                        if let Some(kind) = PropType::parse(&e.value()) {
                            on_change.call(EditChange::PropType(index, kind));
                        }
                    },
                    for kind in PropType::ALL.iter() {
                        option {
                            key: "{kind.as_str()}",
                            value: kind.as_str(),
                            selected: *kind == prop.kind,
                            "{kind.label()}"
                        }
                    }
                }
            }
            ChromelessButton {
                class: Some("p-2 rounded-md text-red-400 hover:bg-red-500/10".to_string()),
                aria_label: Some("Remove property".to_string()),
                onclick: move |_| on_change.call(EditChange::RemoveProp(index)),
                TrashIcon { class: "w-4 h-4" }
            }
        }
    }
}

#[component]
pub fn CustomPageConfig(
    template: Option<PageTemplate>,
    component_name: String,
    custom_props: Vec<CustomProp>,
    on_change: EventHandler<EditChange>,
) -> Element {
    let options: Vec<SelectOption> = PageTemplate::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();
    let selected = template.map(|t| t.as_str().to_string()).unwrap_or_default();

    rsx! {
        super::Panel {
            title: "Custom Page Configuration",
            subtitle: "Configure custom components and templates",
            SelectField {
                id: "edit-template",
                label: "Page Template",
                value: selected,
                options,
                placeholder: Some("Choose a template...".to_string()),
                description: Some("Select a pre-built template or create a custom component".to_string()),
                on_change: move |v: String| on_change.call(EditChange::Template(PageTemplate::parse(&v))),
            }
            if template == Some(PageTemplate::CustomComponent) {
                TextField {
                    id: "edit-component-name",
                    label: "Component Name",
                    value: component_name,
                    placeholder: Some("MyCustomComponent".to_string()),
                    description: Some("Enter the name for your custom component (PascalCase recommended)".to_string()),
                    required: true,
                    on_input: move |v| on_change.call(EditChange::ComponentName(v)),
                }
            } else if let Some(template) = template {
                div { class: "p-4 bg-gray-800/40 border border-gray-700 rounded-lg text-center",
                    h3 { class: "font-medium text-white mb-2", "Template Preview" }
                    p { class: "text-sm text-gray-400", "{template.description()}" }
                }
            }
            div {
                div { class: "flex items-center justify-between mb-3",
                    h3 { class: "font-medium text-white", "Component Properties" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_change.call(EditChange::AddProp),
                        PlusIcon { class: "w-4 h-4" }
                        "Add Property"
                    }
                }
                if custom_props.is_empty() {
                    div { class: "text-center py-6 text-gray-500",
                        SettingsIcon { class: "w-8 h-8 mx-auto mb-2 opacity-50" }
                        p { class: "text-sm", "No custom properties configured" }
                        p { class: "text-xs", "Add properties to customize your component" }
                    }
                } else {
                    div { class: "space-y-3",
                        for (index, prop) in custom_props.into_iter().enumerate() {
                            PropRow { key: "{index}", index, prop, on_change }
                        }
                    }
                }
            }
            TipList { heading: "Development Tips", tips: TIPS }
        }
    }
}
