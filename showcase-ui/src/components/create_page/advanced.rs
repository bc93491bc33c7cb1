use super::section::{enum_options, SectionCard, SubHeading};
use crate::components::{Checkbox, SelectField, TextField};
use dioxus::prelude::*;
use showcase_common::page::{AccessLevel, AdvancedOptions, PageEdit, PublishState, PublishStatus};
use showcase_common::validation::{Field, ValidationErrors};

fn status_hint(status: PublishStatus) -> &'static str {
    match status {
        PublishStatus::Draft => "Not visible to public users",
        PublishStatus::Published => "Live and accessible to all users",
        PublishStatus::Scheduled => "Publish at a specific date/time",
    }
}

fn access_hint(level: AccessLevel) -> &'static str {
    match level {
        AccessLevel::Public => "Anyone can view this page",
        AccessLevel::Authenticated => "Requires login to view",
        AccessLevel::Admin => "Only administrators can access",
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[component]
pub fn AdvancedOptionsSection(
    publish: PublishState,
    advanced: AdvancedOptions,
    errors: ValidationErrors,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    let route_params = advanced.route_param_list().join(", ");

    rsx! {
        SectionCard {
            title: "Advanced Options",
            subtitle: "Configure publishing, access controls, and routing settings",
            SelectField {
                id: "advanced-status",
                label: "Page Status",
                value: publish.status.as_str().to_string(),
                options: enum_options(PublishStatus::ALL, PublishStatus::as_str, PublishStatus::label),
                description: Some(status_hint(publish.status).to_string()),
                on_change: move |v: String| {
                    if let Some(status) = PublishStatus::parse(&v) {
                        on_edit.call(PageEdit::Status(status));
                    }
                },
            }
            if publish.status == PublishStatus::Scheduled {
                div { class: "grid md:grid-cols-2 gap-4",
                    TextField {
                        id: "advanced-publish-date",
                        label: "Publish Date",
                        input_type: "date",
                        value: publish.publish_date.clone(),
                        error: errors.get(Field::PublishDate).map(str::to_string),
                        required: true,
                        on_input: move |v| on_edit.call(PageEdit::PublishDate(v)),
                    }
                    TextField {
                        id: "advanced-publish-time",
                        label: "Publish Time",
                        input_type: "time",
                        value: publish.publish_time.clone(),
                        error: errors.get(Field::PublishTime).map(str::to_string),
                        required: true,
                        on_input: move |v| on_edit.call(PageEdit::PublishTime(v)),
                    }
                }
            }
            SelectField {
                id: "advanced-access-level",
                label: "Access Level",
                value: publish.access_level.as_str().to_string(),
                options: enum_options(AccessLevel::ALL, AccessLevel::as_str, AccessLevel::label),
                description: Some(format!("Who can view this page. {}", access_hint(publish.access_level))),
                on_change: move |v: String| {
                    if let Some(level) = AccessLevel::parse(&v) {
                        on_edit.call(PageEdit::AccessLevel(level));
                    }
                },
            }
            div { class: "space-y-4",
                SubHeading { text: "Custom Routing" }
                TextField {
                    id: "advanced-custom-route",
                    label: "Custom Route Path",
                    value: advanced.custom_route.clone(),
                    placeholder: Some("/custom/path".to_string()),
                    description: Some("Override default URL structure".to_string()),
                    on_input: move |v| on_edit.call(PageEdit::CustomRoute(v)),
                }
                TextField {
                    id: "advanced-route-params",
                    label: "Route Parameters (Optional)",
                    value: advanced.route_params.clone(),
                    placeholder: Some("param1,param2".to_string()),
                    description: Some("Comma-separated list of URL parameters".to_string()),
                    on_input: move |v| on_edit.call(PageEdit::RouteParams(v)),
                }
            }
            div { class: "space-y-4",
                SubHeading { text: "SEO & Analytics" }
                Checkbox {
                    id: "advanced-allow-indexing",
                    label: "Index in search engines",
                    description: Some("Allow search engines to index this page".to_string()),
                    checked: advanced.allow_indexing,
                    on_change: move |v| on_edit.call(PageEdit::AllowIndexing(v)),
                }
                Checkbox {
                    id: "advanced-enable-analytics",
                    label: "Enable analytics tracking",
                    description: Some("Track page views and user interactions".to_string()),
                    checked: advanced.enable_analytics,
                    on_change: move |v| on_edit.call(PageEdit::EnableAnalytics(v)),
                }
                Checkbox {
                    id: "advanced-social-previews",
                    label: "Generate social media previews",
                    description: Some("Create Open Graph and Twitter Card metadata".to_string()),
                    checked: advanced.social_previews,
                    on_change: move |v| on_edit.call(PageEdit::SocialPreviews(v)),
                }
            }
            div { class: "space-y-4",
                SubHeading { text: "Performance" }
                Checkbox {
                    id: "advanced-lazy-loading",
                    label: "Enable lazy loading",
                    description: Some("Load content as user scrolls (recommended)".to_string()),
                    checked: advanced.lazy_loading,
                    on_change: move |v| on_edit.call(PageEdit::LazyLoading(v)),
                }
                Checkbox {
                    id: "advanced-preload-resources",
                    label: "Preload critical resources",
                    description: Some("Load important assets immediately".to_string()),
                    checked: advanced.preload_resources,
                    on_change: move |v| on_edit.call(PageEdit::PreloadResources(v)),
                }
                Checkbox {
                    id: "advanced-enable-caching",
                    label: "Enable caching",
                    description: Some("Cache page content for faster loading".to_string()),
                    checked: advanced.enable_caching,
                    on_change: move |v| on_edit.call(PageEdit::EnableCaching(v)),
                }
            }
            div { class: "space-y-4",
                SubHeading { text: "Custom Code" }
                TextField {
                    id: "advanced-custom-classes",
                    label: "Custom CSS Classes (Optional)",
                    value: advanced.custom_classes.clone(),
                    placeholder: Some("custom-class-1 custom-class-2".to_string()),
                    description: Some("Space-separated CSS classes to apply to the page container".to_string()),
                    on_input: move |v| on_edit.call(PageEdit::CustomClasses(v)),
                }
            }
            div { class: "p-4 bg-gray-800/40 rounded-lg border border-gray-700",
                h4 { class: "text-sm font-medium text-white mb-3", "Configuration Summary" }
                dl { class: "grid grid-cols-2 gap-2 text-sm",
                    dt { class: "text-gray-400", "Status:" }
                    dd { class: "text-white", "{publish.status.label()}" }
                    dt { class: "text-gray-400", "Access:" }
                    dd { class: "text-white", "{publish.access_level.label()}" }
                    dt { class: "text-gray-400", "SEO Indexing:" }
                    dd { class: "text-white", "{enabled(advanced.allow_indexing)}" }
                    dt { class: "text-gray-400", "Analytics:" }
                    dd { class: "text-white", "{enabled(advanced.enable_analytics)}" }
                    if !route_params.is_empty() {
                        dt { class: "text-gray-400", "Route Params:" }
                        dd { class: "text-white font-mono", "{route_params}" }
                    }
                }
            }
        }
    }
}
