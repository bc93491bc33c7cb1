//! Site headers. The public variant is shown to visitors, the admin variant
//! once the auth context reports a logged-in admin.

use crate::components::icons::{ExternalLinkIcon, LogOutIcon, MenuIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;
use showcase_common::catalog::{NavLink, ADMIN_NAV, PUBLIC_NAV};

fn nav_class(active: bool, admin: bool) -> &'static str {
    match (active, admin) {
        (true, true) => "px-3 py-2 rounded-md text-sm font-medium text-blue-400 bg-blue-500/10",
        (false, true) => {
            "px-3 py-2 rounded-md text-sm font-medium text-gray-400 hover:text-white hover:bg-gray-700/50"
        }
        (true, false) => "px-4 py-2 rounded-md text-sm font-medium text-white",
        (false, false) => "px-4 py-2 rounded-md text-sm font-medium text-white/80 hover:text-white",
    }
}

#[component]
fn NavLinks(
    links: &'static [NavLink],
    current_path: String,
    admin: bool,
    on_navigate: EventHandler<String>,
    #[props(default)] on_after: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        for link in links.iter() {
            a {
                key: "{link.label}",
                href: "{link.path}",
                class: nav_class(link.path == current_path, admin),
                aria_current: if link.path == current_path { Some("page") } else { None },
                onclick: move |evt| {
                    evt.prevent_default();
                    on_navigate.call(link.path.to_string());
                    if let Some(after) = on_after {
                        after.call(());
                    }
                },
                "{link.label}"
            }
        }
    }
}

#[component]
pub fn PublicHeaderView(
    site_title: String,
    current_path: String,
    on_navigate: EventHandler<String>,
    on_admin_login: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-40 bg-black/70 backdrop-blur-sm border-b border-white/10",
            div { class: "px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                a {
                    href: "/home-video-gallery",
                    class: "text-xl font-bold text-white truncate",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_navigate.call("/home-video-gallery".to_string());
                    },
                    "{site_title}"
                }
                nav { class: "hidden md:flex items-center gap-6",
                    NavLinks {
                        links: PUBLIC_NAV,
                        current_path: current_path.clone(),
                        admin: false,
                        on_navigate,
                    }
                }
                div { class: "flex items-center gap-2",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        class: Some("hidden sm:inline-flex".to_string()),
                        onclick: move |_| on_admin_login.call(()),
                        "Admin Login"
                    }
                    ChromelessButton {
                        class: Some("md:hidden p-2 text-white".to_string()),
                        aria_label: Some("Toggle mobile menu".to_string()),
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() {
                            XIcon { class: "w-6 h-6" }
                        } else {
                            MenuIcon { class: "w-6 h-6" }
                        }
                    }
                }
            }
            if menu_open() {
                nav { class: "md:hidden flex flex-col px-4 py-2 gap-1 bg-black/80 border-t border-white/10",
                    NavLinks {
                        links: PUBLIC_NAV,
                        current_path,
                        admin: false,
                        on_navigate,
                        on_after: move |_| menu_open.set(false),
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        full_width: true,
                        onclick: move |_| {
                            menu_open.set(false);
                            on_admin_login.call(());
                        },
                        "Admin Login"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminHeaderView(
    current_path: String,
    user_name: String,
    user_email: String,
    on_navigate: EventHandler<String>,
    on_view_live: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut user_menu_open = use_signal(|| false);
    let initial = user_name.chars().next().unwrap_or('A');

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-40 bg-gray-900/95 backdrop-blur-sm border-b border-gray-800",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    a {
                        href: "/home-video-gallery",
                        class: "text-lg font-semibold text-white",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_navigate.call("/home-video-gallery".to_string());
                        },
                        "Enterprise UX"
                    }
                    span { class: "hidden sm:inline px-2 py-0.5 rounded-md bg-amber-500/20 text-xs font-medium text-amber-400",
                        "Admin"
                    }
                }
                nav { class: "hidden md:flex items-center gap-4",
                    NavLinks {
                        links: ADMIN_NAV,
                        current_path,
                        admin: true,
                        on_navigate,
                    }
                }
                div { class: "relative flex items-center gap-3",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        class: Some("hidden lg:inline-flex".to_string()),
                        onclick: move |_| on_view_live.call(()),
                        ExternalLinkIcon { class: "w-4 h-4" }
                        "View Live"
                    }
                    ChromelessButton {
                        class: Some(
                            "w-8 h-8 rounded-full bg-gray-700 text-sm text-white flex items-center justify-center"
                                .to_string(),
                        ),
                        aria_label: Some("User menu".to_string()),
                        onclick: move |_| user_menu_open.toggle(),
                        "{initial}"
                    }
                    if user_menu_open() {
                        div { class: "absolute right-0 top-12 w-56 bg-gray-800 border border-gray-700 rounded-md shadow-lg py-1",
                            div { class: "px-4 py-2 border-b border-gray-700",
                                p { class: "text-sm font-medium text-white", "{user_name}" }
                                p { class: "text-xs text-gray-400", "{user_email}" }
                            }
                            ChromelessButton {
                                class: Some(
                                    "w-full flex items-center gap-2 px-4 py-2 text-sm text-gray-300 hover:bg-gray-700"
                                        .to_string(),
                                ),
                                onclick: move |_| {
                                    user_menu_open.set(false);
                                    on_view_live.call(());
                                },
                                ExternalLinkIcon { class: "w-4 h-4" }
                                "View Live Site"
                            }
                            ChromelessButton {
                                class: Some(
                                    "w-full flex items-center gap-2 px-4 py-2 text-sm text-red-400 hover:bg-red-500/10"
                                        .to_string(),
                                ),
                                onclick: move |_| {
                                    user_menu_open.set(false);
                                    on_logout.call(());
                                },
                                LogOutIcon { class: "w-4 h-4" }
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}
