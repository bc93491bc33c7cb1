use super::go_to;
use crate::context::use_services;
use dioxus::prelude::*;
use showcase_common::catalog::editable_page;
use showcase_common::edit::{check_external_url, check_preview_url, EditChange};
use showcase_ui::stores::edit_page::{EditPageState, EditPageStateStoreExt, PendingLeave};
use showcase_ui::timing::{sleep_ms, use_task_slot};
use showcase_ui::wasm_utils::{
    event_key, has_command_modifier, open_in_new_tab, prevent_default, use_document_listener,
};
use showcase_ui::EditPageView;
use tracing::{debug, info, warn};

const SAVED_MESSAGE: &str = "Changes saved. Your page configuration has been updated.";
const LEAVE_TO: &str = "/home-video-gallery";

fn load_page(state: Store<EditPageState>, id: &str) {
    let Some(page) = editable_page(id) else {
        warn!("Unknown page selected: {id}");
        return;
    };
    debug!("Loading page {id} into the editor");
    state.draft().write().load(page);
    state.url_error().set(None);
    state.preview_error().set(None);
    state.save_error().set(None);
    state.success().set(None);
}

#[component]
pub fn EditPageContent() -> Element {
    let services = use_services();
    let state = use_store(EditPageState::default);
    let mut saver = use_task_slot();
    let mut success_timer = use_task_slot();
    let mut previewer = use_task_slot();

    let save_ms = services.config.latency.edit_save_ms;
    let preview_ms = services.config.latency.preview_ms;
    let clear_ms = services.config.latency.save_success_clear_ms;
    let public_base_url = services.config.public_base_url.clone();

    // `then_preview` navigates to the page afterwards when nothing failed
    let save = use_callback(move |then_preview: bool| {
        if *state.saving().peek() {
            return;
        }
        if !state.draft().peek().is_dirty() {
            if then_preview {
                if let Some(route) = state.draft().peek().preview_route() {
                    go_to(&route);
                }
            }
            return;
        }
        state.saving().set(true);
        state.save_error().set(None);
        state.success().set(None);

        let mut slot = saver;
        saver.start(async move {
            sleep_ms(save_ms).await;
            let outcome = state.draft().peek().check_save();
            state.saving().set(false);
            slot.finish();
            match outcome {
                Ok(saved) => {
                    if saved {
                        state.draft().write().mark_saved();
                        info!("Saved page {:?}", state.draft().peek().page_id());
                        state.success().set(Some(SAVED_MESSAGE.to_string()));
                        let mut timer = success_timer;
                        success_timer.start(async move {
                            sleep_ms(clear_ms).await;
                            state.success().set(None);
                            timer.finish();
                        });
                    }
                    if then_preview {
                        if let Some(route) = state.draft().peek().preview_route() {
                            go_to(&route);
                        }
                    }
                }
                Err(e) => {
                    debug!("Save rejected: {e}");
                    state.save_error().set(Some(e.to_string()));
                }
            }
        });
    });

    use_document_listener("keydown", move |event| {
        if !has_command_modifier(&event) {
            return;
        }
        match event_key(&event).as_deref() {
            Some("s") => {
                prevent_default(&event);
                save.call(false);
            }
            Some("p") => {
                prevent_default(&event);
                save.call(true);
            }
            _ => {}
        }
    });

    let on_preview_url = move |_| {
        if *state.previewing().peek() {
            return;
        }
        state.previewing().set(true);
        state.preview_error().set(None);
        let url = state.draft().peek().external_url.clone();
        let mut slot = previewer;
        previewer.start(async move {
            sleep_ms(preview_ms).await;
            match check_preview_url(&url) {
                Ok(()) => open_in_new_tab(&url),
                Err(e) => state.preview_error().set(Some(e.to_string())),
            }
            state.previewing().set(false);
            slot.finish();
        });
    };

    rsx! {
        EditPageView {
            state,
            public_base_url,
            on_select_page: move |id: String| {
                if id.is_empty() || state.draft().peek().page_id() == Some(id.as_str()) {
                    return;
                }
                if state.draft().peek().needs_confirmation() {
                    state.pending_leave().set(Some(PendingLeave::SwitchPage(id)));
                } else {
                    load_page(state, &id);
                }
            },
            on_change: move |change: EditChange| {
                if let EditChange::ExternalUrl(url) = &change {
                    let feedback = if url.is_empty() {
                        None
                    } else {
                        check_external_url(url).err().map(|e| e.to_string())
                    };
                    state.url_error().set(feedback);
                }
                state.draft().write().apply(change);
                state.success().set(None);
            },
            on_preview_url,
            on_save: move |_| save.call(false),
            on_save_and_preview: move |_| save.call(true),
            on_cancel: move |_| {
                if state.draft().peek().is_dirty() {
                    state.pending_leave().set(Some(PendingLeave::Cancel));
                } else {
                    go_to(LEAVE_TO);
                }
            },
            on_dismiss_success: move |_| {
                success_timer.cancel();
                state.success().set(None);
            },
            on_confirm_leave: move |_| {
                let pending = state.pending_leave().write().take();
                match pending {
                    Some(PendingLeave::SwitchPage(id)) => load_page(state, &id),
                    Some(PendingLeave::Cancel) => go_to(LEAVE_TO),
                    None => {}
                }
            },
            on_cancel_leave: move |_| state.pending_leave().set(None),
        }
    }
}
