use super::section::{enum_options, SectionCard, SubHeading};
use crate::components::icons::SettingsIcon;
use crate::components::{Checkbox, SelectField, TextField};
use dioxus::prelude::*;
use showcase_common::page::{
    AspectRatio, ContentType, GridLayout, PageEdit, ScalingMode, TemplateConfig,
};
use showcase_common::validation::{Field, ValidationErrors};

fn grid_hint(layout: GridLayout) -> &'static str {
    match layout {
        GridLayout::Grid3 => "Standard desktop layout",
        GridLayout::Grid4 => "Compact view for many videos",
        GridLayout::Masonry => "Pinterest-style dynamic grid",
    }
}

fn scaling_hint(mode: ScalingMode) -> &'static str {
    match mode {
        ScalingMode::Responsive => "Automatically adjusts to container",
        ScalingMode::Fixed => "Maintains original size",
        ScalingMode::Fill => "Stretches to fill available space",
    }
}

/// Settings for the selected content type; a placeholder until one is chosen
#[component]
pub fn TemplateSection(
    content_type: Option<ContentType>,
    template: TemplateConfig,
    errors: ValidationErrors,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    let Some(content_type) = content_type else {
        return rsx! {
            section { class: "bg-gray-900 border border-gray-800 rounded-lg p-6 text-center py-8",
                SettingsIcon { class: "w-12 h-12 mx-auto mb-4 text-gray-600" }
                h3 { class: "text-lg font-semibold text-white mb-2", "Select Content Type First" }
                p { class: "text-gray-400",
                    "Choose a template above to configure its specific settings"
                }
            }
        };
    };

    let subtitle = format!("Customize settings for your {}", content_type.label());

    rsx! {
        SectionCard { title: "Template Configuration", subtitle,
            {match content_type {
                ContentType::VideoTemplate => rsx! {
                    VideoSettings { template, on_edit }
                },
                ContentType::PrototypeTemplate => rsx! {
                    PrototypeSettings {
                        template,
                        error: errors.get(Field::PrototypeUrl).map(str::to_string),
                        on_edit,
                    }
                },
                ContentType::External => rsx! {
                    TextField {
                        id: "template-external-url",
                        label: "External URL",
                        input_type: "url",
                        value: template.external_url.clone(),
                        placeholder: Some("https://example.com".to_string()),
                        description: Some("Absolute URL of the page to display".to_string()),
                        error: errors.get(Field::ExternalUrl).map(str::to_string),
                        required: true,
                        on_input: move |v| on_edit.call(PageEdit::ExternalUrl(v)),
                    }
                },
                ContentType::Custom => rsx! {
                    p { class: "text-sm text-gray-400",
                        "Custom pages are assembled from the Edit Pages screen after saving."
                    }
                },
            }}
        }
    }
}

#[component]
fn VideoSettings(template: TemplateConfig, on_edit: EventHandler<PageEdit>) -> Element {
    rsx! {
        SelectField {
            id: "template-grid-layout",
            label: "Grid Layout",
            value: template.grid_layout.as_str().to_string(),
            options: enum_options(GridLayout::ALL, GridLayout::as_str, GridLayout::label),
            description: Some(format!("Choose how videos will be arranged on the page. {}", grid_hint(template.grid_layout))),
            on_change: move |v: String| {
                if let Some(layout) = GridLayout::parse(&v) {
                    on_edit.call(PageEdit::GridLayout(layout));
                }
            },
        }
        div { class: "space-y-4",
            SubHeading { text: "Playback Settings" }
            Checkbox {
                id: "template-hover-preview",
                label: "Enable hover preview",
                description: Some("Show video preview on thumbnail hover".to_string()),
                checked: template.hover_preview,
                on_change: move |v| on_edit.call(PageEdit::HoverPreview(v)),
            }
            Checkbox {
                id: "template-auto-mute",
                label: "Auto-mute videos",
                description: Some("Start videos muted by default".to_string()),
                checked: template.auto_mute,
                on_change: move |v| on_edit.call(PageEdit::AutoMute(v)),
            }
            Checkbox {
                id: "template-show-duration",
                label: "Show video duration",
                description: Some("Display video length on thumbnails".to_string()),
                checked: template.show_duration,
                on_change: move |v| on_edit.call(PageEdit::ShowDuration(v)),
            }
        }
        div { class: "grid md:grid-cols-2 gap-4",
            TextField {
                id: "template-thumbnail-height",
                label: "Thumbnail Height",
                input_type: "number",
                value: template.thumbnail_height.clone(),
                placeholder: Some("200".to_string()),
                description: Some("Height in pixels (150-400)".to_string()),
                on_input: move |v| on_edit.call(PageEdit::ThumbnailHeight(v)),
            }
            SelectField {
                id: "template-aspect-ratio",
                label: "Aspect Ratio",
                value: template.aspect_ratio.as_str().to_string(),
                options: enum_options(AspectRatio::ALL, AspectRatio::as_str, AspectRatio::label),
                on_change: move |v: String| {
                    if let Some(ratio) = AspectRatio::parse(&v) {
                        on_edit.call(PageEdit::AspectRatio(ratio));
                    }
                },
            }
        }
    }
}

#[component]
fn PrototypeSettings(
    template: TemplateConfig,
    error: Option<String>,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    rsx! {
        TextField {
            id: "template-prototype-url",
            label: "Prototype URL",
            input_type: "url",
            value: template.prototype_url.clone(),
            placeholder: Some("https://www.figma.com/proto/...".to_string()),
            description: Some("Figma prototype link or other embeddable URL".to_string()),
            error,
            required: true,
            on_input: move |v| on_edit.call(PageEdit::PrototypeUrl(v)),
        }
        SelectField {
            id: "template-scaling",
            label: "Scaling Behavior",
            value: template.scaling.as_str().to_string(),
            options: enum_options(ScalingMode::ALL, ScalingMode::as_str, ScalingMode::label),
            description: Some(format!("How the prototype should scale within the container. {}", scaling_hint(template.scaling))),
            on_change: move |v: String| {
                if let Some(mode) = ScalingMode::parse(&v) {
                    on_edit.call(PageEdit::Scaling(mode));
                }
            },
        }
        div { class: "space-y-4",
            SubHeading { text: "Display Options" }
            Checkbox {
                id: "template-show-controls",
                label: "Show header controls",
                description: Some("Display zoom and fullscreen controls".to_string()),
                checked: template.show_controls,
                on_change: move |v| on_edit.call(PageEdit::ShowControls(v)),
            }
            Checkbox {
                id: "template-allow-fullscreen",
                label: "Allow fullscreen",
                description: Some("Enable fullscreen viewing mode".to_string()),
                checked: template.allow_fullscreen,
                on_change: move |v| on_edit.call(PageEdit::AllowFullscreen(v)),
            }
            Checkbox {
                id: "template-show-external-link",
                label: "Show external link",
                description: Some("Add button to open prototype in new tab".to_string()),
                checked: template.show_external_link,
                on_change: move |v| on_edit.call(PageEdit::ShowExternalLink(v)),
            }
        }
        div { class: "grid md:grid-cols-2 gap-4",
            TextField {
                id: "template-container-height",
                label: "Container Height",
                input_type: "number",
                value: template.container_height.clone(),
                placeholder: Some("600".to_string()),
                description: Some("Height in pixels (400-1200)".to_string()),
                on_input: move |v| on_edit.call(PageEdit::ContainerHeight(v)),
            }
            TextField {
                id: "template-mobile-height",
                label: "Mobile Height",
                input_type: "number",
                value: template.mobile_height.clone(),
                placeholder: Some("400".to_string()),
                description: Some("Height on mobile devices (300-800)".to_string()),
                on_input: move |v| on_edit.call(PageEdit::MobileHeight(v)),
            }
        }
    }
}
