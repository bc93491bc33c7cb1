use super::{go_to, replace_with};
use crate::context::{use_services, use_session_user};
use crate::Route;
use dioxus::prelude::*;
use showcase_common::auth::{login_url_for, LOGIN_ROUTE};
use showcase_ui::wasm_utils::open_in_new_tab;
use showcase_ui::{AdminHeaderView, AppLayoutView, LoadingSpinner, PublicHeaderView};
use tracing::info;

/// Path without the query string, for highlighting nav links
fn current_path(route: &Route) -> String {
    let full = route.to_string();
    match full.split_once('?') {
        Some((path, _)) => path.to_string(),
        None => full,
    }
}

#[component]
fn AdminHeader(current_path: String) -> Element {
    let services = use_services();
    let mut session = use_session_user();
    let Some(user) = session.0() else {
        return rsx! {};
    };

    rsx! {
        AdminHeaderView {
            current_path,
            user_name: user.name,
            user_email: user.email,
            on_navigate: move |path: String| go_to(&path),
            on_view_live: move |_| open_in_new_tab("/"),
            on_logout: move |_| {
                services.auth.logout();
                session.0.set(None);
                go_to("/");
            },
        }
    }
}

/// Public pages: admin header when logged in, public header otherwise
#[component]
pub fn PublicLayout() -> Element {
    let route = use_route::<Route>();
    let services = use_services();
    let session = use_session_user();
    let path = current_path(&route);

    let header = if session.is_admin() {
        rsx! {
            AdminHeader { current_path: path }
        }
    } else {
        rsx! {
            PublicHeaderView {
                site_title: services.config.site_name.clone(),
                current_path: path,
                on_navigate: move |path: String| go_to(&path),
                on_admin_login: move |_| go_to(LOGIN_ROUTE),
            }
        }
    };

    rsx! {
        // Public pages lay out their own content under the transparent header
        AppLayoutView { header, offset_header: false, Outlet::<Route> {} }
    }
}

/// Admin pages. Visitors without a session are sent to the login page with
/// a redirect back to where they were going.
#[component]
pub fn AdminGuard() -> Element {
    let route = use_route::<Route>();
    let session = use_session_user();
    let path = current_path(&route);
    let allowed = session.is_admin();

    let target = path.clone();
    use_effect(use_reactive((&allowed, &target), move |(allowed, target)| {
        if !allowed {
            info!("Redirecting {target} to login");
            replace_with(&login_url_for(&target));
        }
    }));

    if !allowed {
        return rsx! {
            LoadingSpinner { message: "Checking access...", full_screen: true }
        };
    }

    rsx! {
        AppLayoutView {
            class: "min-h-screen bg-gray-950 text-white",
            header: rsx! {
                AdminHeader { current_path: path }
            },
            Outlet::<Route> {}
        }
    }
}
