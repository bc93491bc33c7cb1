use super::go_to;
use crate::context::{use_flash, use_services};
use crate::storage::store_preview;
use chrono::Utc;
use dioxus::prelude::*;
use showcase_common::page::{PageEdit, PreviewData, PublishStatus};
use showcase_common::validation::{validate, ValidationMode};
use showcase_ui::stores::create_page::{CreatePageState, CreatePageStateStoreExt, SaveAction};
use showcase_ui::timing::{sleep_ms, use_task_slot};
use showcase_ui::wasm_utils::open_in_new_tab;
use showcase_ui::CreatePageView;
use tracing::{debug, info, warn};

#[component]
pub fn CreateNewPage() -> Element {
    let services = use_services();
    let mut flash = use_flash();
    let state = use_store(CreatePageState::default);
    let mut request = use_task_slot();

    let reserved = services.config.reserved_slugs.clone();
    let live_reserved = reserved.clone();
    let draft_ms = services.config.latency.save_draft_ms;
    let publish_ms = services.config.latency.publish_ms;

    // Validates the draft and records the errors. Returns whether it passed.
    let check = use_callback(move |mode: ValidationMode| {
        let errors = validate(&state.page().peek(), &reserved, mode);
        let passed = errors.is_empty();
        if !passed {
            debug!("Page draft failed {mode:?} validation with {} errors", errors.len());
        }
        state.errors().set(errors);
        passed
    });

    let mut submit = move |action: SaveAction| {
        if state.pending().peek().is_some() {
            return;
        }
        let mode = match action {
            SaveAction::Draft => ValidationMode::Draft,
            SaveAction::Publish => ValidationMode::Publish,
        };
        if !check.call(mode) {
            return;
        }
        state.general_error().set(None);
        state.pending().set(Some(action));

        let (status, delay, landing, verb) = match action {
            SaveAction::Draft => (
                PublishStatus::Draft,
                draft_ms,
                "/edit-page-content",
                "saved as draft",
            ),
            SaveAction::Publish => (
                PublishStatus::Published,
                publish_ms,
                "/home-video-gallery",
                "published",
            ),
        };
        let mut slot = request;
        request.start(async move {
            sleep_ms(delay).await;
            let record = state.page().peek().to_record(status, Utc::now());
            match serde_json::to_string(&record) {
                Ok(json) => {
                    info!("Page {} {verb}", record.slug);
                    debug!("Saved page record: {json}");
                    flash.set(format!("Page \"{}\" {verb} successfully!", record.title));
                    state.pending().set(None);
                    slot.finish();
                    go_to(landing);
                }
                Err(e) => {
                    warn!("Could not serialize page record: {e}");
                    let message = match action {
                        SaveAction::Draft => "Failed to save draft. Please try again.",
                        SaveAction::Publish => "Failed to publish page. Please try again.",
                    };
                    state.general_error().set(Some(message.to_string()));
                    state.pending().set(None);
                    slot.finish();
                }
            }
        });
    };

    let on_preview = move |_| {
        if !check.call(ValidationMode::Publish) {
            return;
        }
        let data = PreviewData::from(&*state.page().peek());
        if let Err(e) = store_preview(&data) {
            warn!("Could not store preview data: {e}");
            state
                .general_error()
                .set(Some("Failed to open preview. Please try again.".to_string()));
            return;
        }
        open_in_new_tab(&format!("/preview/{}", data.slug));
    };

    rsx! {
        CreatePageView {
            state,
            on_edit: move |edit: PageEdit| {
                state.page().write().apply(edit);
                // Messages already on screen follow the draft as it changes
                if !state.errors().peek().is_empty() {
                    let fresh = validate(
                        &state.page().peek(),
                        &live_reserved,
                        ValidationMode::Publish,
                    );
                    state.errors().write().refresh(&fresh);
                }
            },
            on_save_draft: move |_| submit(SaveAction::Draft),
            on_publish: move |_| submit(SaveAction::Publish),
            on_preview,
            on_cancel: move |_| go_to("/admin-dashboard"),
        }
    }
}
