//! Controlled form primitives with label, description and inline error

use dioxus::prelude::*;

const INPUT_BASE: &str = "w-full bg-gray-800/50 border rounded-lg px-3 py-2 text-gray-200 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-blue-500/50 disabled:opacity-50 disabled:cursor-not-allowed";

fn border_class(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "border-red-500"
    } else {
        "border-gray-700"
    }
}

/// Label row, optional description and the error line shared by every field
#[component]
fn FieldShell(
    id: String,
    label: String,
    required: bool,
    description: Option<String>,
    error: Option<String>,
    /// `(current, max)` character counter shown next to the label
    counter: Option<(usize, usize)>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "space-y-1",
            div { class: "flex items-center justify-between",
                label { r#for: "{id}", class: "block text-sm font-medium text-gray-300",
                    "{label}"
                    if required {
                        span { class: "text-red-400 ml-0.5", "*" }
                    }
                }
                if let Some((current, max)) = counter {
                    span { class: if current > max { "text-xs text-red-400" } else { "text-xs text-gray-500" },
                        "{current}/{max}"
                    }
                }
            }
            {children}
            if let Some(description) = description {
                p { class: "text-xs text-gray-500", "{description}" }
            }
            if let Some(error) = error {
                p { class: "text-xs text-red-400", role: "alert", "{error}" }
            }
        }
    }
}

#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] max_chars: Option<usize>,
    #[props(default)] autocomplete: Option<&'static str>,
    #[props(default)] autofocus: bool,
) -> Element {
    let counter = max_chars.map(|max| (value.chars().count(), max));
    let class = format!("{INPUT_BASE} {}", border_class(&error));

    rsx! {
        FieldShell {
            id: id.clone(),
            label,
            required,
            description,
            error: error.clone(),
            counter,
            input {
                id: "{id}",
                r#type: input_type,
                class: "{class}",
                value: "{value}",
                placeholder: placeholder.as_deref(),
                disabled,
                autocomplete,
                aria_invalid: error.is_some(),
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}

#[component]
pub fn TextArea(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] max_chars: Option<usize>,
) -> Element {
    let counter = max_chars.map(|max| (value.chars().count(), max));
    let class = format!("{INPUT_BASE} {} resize-y", border_class(&error));

    rsx! {
        FieldShell {
            id: id.clone(),
            label,
            required,
            description,
            error,
            counter,
            textarea {
                id: "{id}",
                class: "{class}",
                rows: "{rows}",
                value: "{value}",
                placeholder: placeholder.as_deref(),
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// One `<option>`: submitted value and visible label
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>`. An empty `value` selects the placeholder.
#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    let class = format!("{INPUT_BASE} {}", border_class(&error));

    rsx! {
        FieldShell {
            id: id.clone(),
            label,
            required,
            description,
            error,
            counter: None,
            select {
                id: "{id}",
                class: "{class}",
                value: "{value}",
                onchange: move |e| on_change.call(e.value()),
                if let Some(placeholder) = placeholder {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Checkbox(
    id: String,
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] description: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "flex items-start gap-3",
            input {
                id: "{id}",
                r#type: "checkbox",
                class: "mt-1 rounded border-gray-600 bg-gray-800",
                checked,
                disabled,
                onchange: move |e| on_change.call(e.checked()),
            }
            div {
                label { r#for: "{id}", class: "text-sm text-gray-300", "{label}" }
                if let Some(description) = description {
                    p { class: "text-xs text-gray-500", "{description}" }
                }
            }
        }
    }
}
