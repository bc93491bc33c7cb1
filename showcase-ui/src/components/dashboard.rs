//! Admin dashboard - pure rendering over `ReadStore<DashboardState>`
//!
//! Every clickable tile resolves to an [`ActionTarget`]; the page decides
//! whether that means navigating or showing a "coming soon" notice.

use crate::components::helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
use crate::components::icons::{
    BarChartIcon, ChevronRightIcon, ExternalLinkIcon, EyeIcon, FileTextIcon, LayoutGridIcon,
    PencilIcon, PlusIcon, RefreshIcon,
};
use crate::components::{Button, ButtonSize, ButtonVariant, SuccessBanner};
use crate::stores::dashboard::{DashboardState, DashboardStateStoreExt};
use dioxus::prelude::*;
use showcase_common::catalog::{
    format_short_datetime, ActionTarget, DashboardData, RecentPage, RecentStatus, QUICK_ACTIONS,
};

const CREATE_ROUTE: ActionTarget = ActionTarget::Route("/create-new-page");
const EDIT_ROUTE: ActionTarget = ActionTarget::Route("/edit-page-content");

fn status_badge(status: RecentStatus) -> &'static str {
    match status {
        RecentStatus::Published => "bg-green-500/10 text-green-400",
        RecentStatus::Draft => "bg-amber-500/10 text-amber-400",
    }
}

#[component]
pub fn DashboardView(
    state: ReadStore<DashboardState>,
    on_action: EventHandler<ActionTarget>,
    on_view_live: EventHandler<()>,
    /// Opens a published page in a new tab
    on_open_page: EventHandler<String>,
    on_refresh: EventHandler<()>,
    on_dismiss_notice: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let data = state.data().read().clone();
    let notice = state.notice().read().clone();

    rsx! {
        div { class: "pt-16",
            PageContainer {
                div { class: "mb-8 flex flex-col sm:flex-row sm:items-center justify-between gap-4",
                    div {
                        h1 { class: "text-3xl font-bold text-white mb-2", "Dashboard" }
                        p { class: "text-gray-400",
                            "Welcome back! Here's what's happening with your portfolio."
                        }
                    }
                    div { class: "flex items-center gap-3",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_view_live.call(()),
                            ExternalLinkIcon { class: "w-4 h-4" }
                            "View Live"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Medium,
                            disabled: loading,
                            onclick: move |_| on_refresh.call(()),
                            RefreshIcon { class: "w-4 h-4" }
                            "Refresh"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            onclick: move |_| on_action.call(CREATE_ROUTE),
                            PlusIcon { class: "w-4 h-4" }
                            "New Page"
                        }
                    }
                }
                if let Some(message) = notice {
                    div { class: "mb-6",
                        SuccessBanner { message, on_dismiss: move |_| on_dismiss_notice.call(()) }
                    }
                }
                if loading {
                    LoadingSpinner { message: "Loading dashboard...".to_string() }
                } else if let Some(message) = error {
                    ErrorDisplay {
                        title: Some("Dashboard Unavailable".to_string()),
                        message,
                        on_retry: move |_| on_refresh.call(()),
                    }
                } else if let Some(data) = data {
                    DashboardBody { data, on_action, on_open_page }
                }
            }
        }
    }
}

#[component]
fn DashboardBody(
    data: DashboardData,
    on_action: EventHandler<ActionTarget>,
    on_open_page: EventHandler<String>,
) -> Element {
    let cards = data.management_cards();
    let backup = format_short_datetime(data.system.last_backup);
    let (health_dot, health_text, health_label) = if data.system.healthy {
        ("bg-green-400", "text-green-400", "Healthy")
    } else {
        ("bg-red-400", "text-red-400", "Degraded")
    };

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6 mb-8",
            for card in cards {
                button {
                    key: "{card.title}",
                    r#type: "button",
                    class: "text-left bg-gray-900 border border-gray-800 rounded-lg p-6 hover:border-blue-500/30 transition-colors",
                    onclick: move |_| on_action.call(card.target),
                    div { class: "flex items-center justify-between mb-4",
                        div { class: "w-10 h-10 bg-blue-500/10 rounded-lg flex items-center justify-center text-blue-400",
                            LayoutGridIcon { class: "w-5 h-5" }
                        }
                        span { class: "text-xs text-green-400 font-medium", "{card.trend}" }
                    }
                    h3 { class: "text-2xl font-bold text-white", "{card.count}" }
                    p { class: "text-sm font-medium text-gray-200", "{card.title}" }
                    p { class: "text-xs text-gray-500", "{card.description}" }
                }
            }
        }
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
            section { class: "bg-gray-900 border border-gray-800 rounded-lg p-6",
                div { class: "flex items-center justify-between mb-6",
                    h2 { class: "text-xl font-semibold text-white", "Recent Pages" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| on_action.call(EDIT_ROUTE),
                        "View All"
                    }
                }
                div { class: "space-y-3",
                    for page in data.recent_pages.iter().cloned() {
                        RecentPageRow { key: "{page.id}", page, on_action, on_open_page }
                    }
                }
            }
            section { class: "bg-gray-900 border border-gray-800 rounded-lg p-6",
                h2 { class: "text-xl font-semibold text-white mb-6", "Quick Actions" }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for action in QUICK_ACTIONS.iter() {
                        button {
                            key: "{action.title}",
                            r#type: "button",
                            class: "group text-left p-4 border border-gray-800 rounded-lg hover:border-blue-500/30 hover:bg-blue-500/5 transition-colors",
                            onclick: move |_| on_action.call(action.target),
                            div { class: "flex items-center gap-3 mb-3",
                                div { class: "w-8 h-8 bg-gray-800 rounded-lg flex items-center justify-center text-blue-400",
                                    if matches!(action.target, ActionTarget::Route(_)) {
                                        FileTextIcon { class: "w-4 h-4" }
                                    } else {
                                        BarChartIcon { class: "w-4 h-4" }
                                    }
                                }
                                h3 { class: "font-medium text-white group-hover:text-blue-400", "{action.title}" }
                            }
                            p { class: "text-xs text-gray-500 mb-2", "{action.description}" }
                            div { class: "flex items-center justify-between",
                                span { class: "text-xs text-gray-500 font-mono", "{action.shortcut}" }
                                ChevronRightIcon { class: "w-3 h-3 text-gray-500 group-hover:text-blue-400" }
                            }
                        }
                    }
                }
            }
        }
        section { class: "mt-8 bg-gray-900 border border-gray-800 rounded-lg p-6",
            h2 { class: "text-xl font-semibold text-white mb-6", "System Status" }
            div { class: "grid grid-cols-1 md:grid-cols-4 gap-6 text-center",
                div {
                    div { class: "flex items-center justify-center mb-2",
                        div { class: "w-3 h-3 rounded-full mr-2 {health_dot}" }
                        span { class: "text-sm font-medium {health_text}", "{health_label}" }
                    }
                    p { class: "text-xs text-gray-500", "System Status" }
                }
                div {
                    div { class: "text-lg font-semibold text-white mb-1", "{data.system.uptime}" }
                    p { class: "text-xs text-gray-500", "Uptime" }
                }
                div {
                    div { class: "text-lg font-semibold text-white mb-1", "{backup}" }
                    p { class: "text-xs text-gray-500", "Last Backup" }
                }
                div {
                    div { class: "text-lg font-semibold text-white mb-1", "{data.system.storage}" }
                    p { class: "text-xs text-gray-500", "Storage Used" }
                }
            }
        }
    }
}

#[component]
fn RecentPageRow(
    page: RecentPage,
    on_action: EventHandler<ActionTarget>,
    on_open_page: EventHandler<String>,
) -> Element {
    let modified = page.modified_label();
    let badge = status_badge(page.status);

    rsx! {
        div { class: "flex items-center justify-between p-3 bg-gray-800/30 rounded-lg hover:bg-gray-800/60 transition-colors",
            div { class: "flex-1 min-w-0",
                div { class: "flex items-center gap-3",
                    h3 { class: "font-medium text-white truncate", "{page.title}" }
                    span { class: "px-2 py-1 text-xs font-medium rounded-full {badge}",
                        "{page.status.as_str()}"
                    }
                }
                div { class: "flex items-center gap-4 mt-1 text-xs text-gray-500",
                    span { "Modified {modified}" }
                    span { "{page.views} views" }
                }
            }
            div { class: "flex items-center gap-2",
                if let Some(url) = page.url {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        title: Some(format!("Open {}", page.title)),
                        onclick: move |_| on_open_page.call(url.to_string()),
                        EyeIcon { class: "w-4 h-4" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    title: Some(format!("Edit {}", page.title)),
                    onclick: move |_| on_action.call(EDIT_ROUTE),
                    PencilIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
