//! Reusable button component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Button without visual styling. Handles disabled/loading and accessibility
/// so icon buttons and custom controls behave like [`Button`].
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_busy: if loading { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Accent background for the main action of a form
    Primary,
    Secondary,
    /// Red background for destructive actions
    Danger,
    /// Text only with hover
    Ghost,
    /// Bordered, transparent background
    Outline,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] full_width: bool,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
        ButtonSize::Large => "px-6 py-3 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-200",
        ButtonVariant::Danger => "bg-red-600 hover:bg-red-500 text-white",
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
        ButtonVariant::Outline => {
            "border border-gray-600 text-gray-200 hover:border-gray-400 hover:bg-gray-800"
        }
    };

    let width = if full_width { "w-full justify-center" } else { "" };
    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed {padding} {variant_class} {width} {}",
        class.unwrap_or_default()
    );

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            title,
            class: Some(computed_class),
            onclick,
            if loading {
                LoaderIcon { class: "w-4 h-4 animate-spin" }
            }
            {children}
        }
    }
}
