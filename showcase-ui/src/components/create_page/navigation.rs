use super::section::{enum_options, SectionCard, SubHeading};
use crate::components::icons::EyeIcon;
use crate::components::{Checkbox, SelectField, SelectOption, TextField};
use dioxus::prelude::*;
use showcase_common::page::{MenuPosition, NavigationConfig, PageEdit, ParentPage, MENU_ORDER_MAX};

fn position_hint(position: MenuPosition) -> &'static str {
    match position {
        MenuPosition::MainNav => "Appears in primary header menu",
        MenuPosition::Footer => "Shows in footer navigation",
        MenuPosition::Hidden => "Accessible by direct URL only",
    }
}

fn parent_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "None (Top Level)")];
    options.extend(enum_options(ParentPage::ALL, ParentPage::as_str, ParentPage::label));
    options
}

#[component]
pub fn NavigationSection(
    navigation: NavigationConfig,
    /// Page title, shown when no custom label is set
    title: String,
    on_edit: EventHandler<PageEdit>,
) -> Element {
    let parent_value = navigation
        .parent_page
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();
    let preview_label = navigation.effective_label(&title).to_string();
    let order_max = MENU_ORDER_MAX.to_string();

    rsx! {
        SectionCard {
            title: "Navigation Integration",
            subtitle: "Configure how this page appears in site navigation",
            SelectField {
                id: "nav-menu-position",
                label: "Menu Position",
                value: navigation.menu_position.as_str().to_string(),
                options: enum_options(MenuPosition::ALL, MenuPosition::as_str, MenuPosition::label),
                description: Some(position_hint(navigation.menu_position).to_string()),
                on_change: move |v: String| {
                    if let Some(position) = MenuPosition::parse(&v) {
                        on_edit.call(PageEdit::MenuPosition(position));
                    }
                },
            }
            SelectField {
                id: "nav-parent-page",
                label: "Parent Page",
                value: parent_value,
                options: parent_options(),
                description: Some("Group this page under another section".to_string()),
                on_change: move |v: String| on_edit.call(PageEdit::ParentPage(ParentPage::parse(&v))),
            }
            TextField {
                id: "nav-label",
                label: "Navigation Label (Optional)",
                value: navigation.nav_label.clone(),
                placeholder: Some("Custom menu text (defaults to page title)".to_string()),
                description: Some("Leave empty to use page title as navigation text".to_string()),
                on_input: move |v| on_edit.call(PageEdit::NavLabel(v)),
            }
            div { class: "grid md:grid-cols-2 gap-4",
                div { class: "space-y-1",
                    label { r#for: "nav-menu-order", class: "block text-sm font-medium text-gray-300",
                        "Menu Order"
                    }
                    input {
                        id: "nav-menu-order",
                        r#type: "number",
                        class: "w-full bg-gray-800/50 border border-gray-700 rounded-lg px-3 py-2 text-gray-200",
                        min: "0",
                        max: "{order_max}",
                        value: "{navigation.menu_order}",
                        oninput: move |e| on_edit.call(PageEdit::MenuOrder(e.value())),
                    }
                    p { class: "text-xs text-gray-500", "Lower numbers appear first (0 = first)" }
                }
                TextField {
                    id: "nav-menu-icon",
                    label: "Menu Icon (Optional)",
                    value: navigation.menu_icon.clone(),
                    placeholder: Some("FileText".to_string()),
                    description: Some("Lucide icon name (e.g., FileText, Play, Monitor)".to_string()),
                    on_input: move |v| on_edit.call(PageEdit::MenuIcon(v)),
                }
            }
            div { class: "space-y-4",
                SubHeading { text: "Visibility Settings" }
                Checkbox {
                    id: "nav-show-in-nav",
                    label: "Show in navigation",
                    description: Some("Display this page in the selected menu".to_string()),
                    checked: navigation.show_in_nav,
                    on_change: move |v| on_edit.call(PageEdit::ShowInNav(v)),
                }
                Checkbox {
                    id: "nav-show-in-sitemap",
                    label: "Show in sitemap",
                    description: Some("Include in XML sitemap for search engines".to_string()),
                    checked: navigation.show_in_sitemap,
                    on_change: move |v| on_edit.call(PageEdit::ShowInSitemap(v)),
                }
                Checkbox {
                    id: "nav-require-auth",
                    label: "Require authentication",
                    description: Some("Restrict access to logged-in users only".to_string()),
                    checked: navigation.require_auth,
                    on_change: move |v| on_edit.call(PageEdit::RequireAuth(v)),
                }
            }
            div { class: "p-4 bg-gray-800/40 rounded-lg border border-gray-700",
                h4 { class: "text-sm font-medium text-white mb-3 flex items-center gap-2",
                    EyeIcon { class: "w-4 h-4" }
                    "Navigation Preview"
                }
                dl { class: "space-y-2 text-sm",
                    div { class: "flex gap-2",
                        dt { class: "text-gray-400", "Position:" }
                        dd { class: "text-white font-medium", "{navigation.menu_position.label()}" }
                    }
                    div { class: "flex gap-2",
                        dt { class: "text-gray-400", "Label:" }
                        dd { class: "text-white font-medium", "{preview_label}" }
                    }
                    div { class: "flex gap-2",
                        dt { class: "text-gray-400", "Order:" }
                        dd { class: "text-white font-medium", "{navigation.menu_order}" }
                    }
                    if !navigation.menu_icon.is_empty() {
                        div { class: "flex gap-2",
                            dt { class: "text-gray-400", "Icon:" }
                            dd { class: "text-white font-medium", "{navigation.menu_icon}" }
                        }
                    }
                }
            }
        }
    }
}
