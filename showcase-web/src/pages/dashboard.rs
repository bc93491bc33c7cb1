use super::go_to;
use crate::context::use_services;
use dioxus::prelude::*;
use showcase_common::catalog::{dashboard_data, ActionTarget};
use showcase_ui::stores::dashboard::{DashboardState, DashboardStateStoreExt};
use showcase_ui::timing::{sleep_ms, use_task_slot};
use showcase_ui::wasm_utils::open_in_new_tab;
use showcase_ui::DashboardView;
use tracing::info;

#[component]
pub fn AdminDashboard() -> Element {
    let services = use_services();
    let delay_ms = services.config.latency.dashboard_ms;
    let state = use_store(DashboardState::default);
    let mut loader = use_task_slot();

    let load = use_callback(move |_: ()| {
        state.loading().set(true);
        state.error().set(None);
        let mut slot = loader;
        loader.start(async move {
            sleep_ms(delay_ms).await;
            state.data().set(Some(dashboard_data()));
            state.loading().set(false);
            slot.finish();
        });
    });

    use_effect(move || load.call(()));

    rsx! {
        DashboardView {
            state,
            on_action: move |target: ActionTarget| match target {
                ActionTarget::Route(path) => go_to(path),
                ActionTarget::ComingSoon(message) => {
                    info!("Dashboard action not available: {message}");
                    state.notice().set(Some(message.to_string()));
                }
            },
            on_view_live: move |_| open_in_new_tab("/"),
            on_open_page: move |url: String| open_in_new_tab(&url),
            on_refresh: move |_| load.call(()),
            on_dismiss_notice: move |_| state.notice().set(None),
        }
    }
}
