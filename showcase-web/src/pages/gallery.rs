use crate::context::{use_flash, use_session_user};
use dioxus::prelude::*;
use showcase_common::gallery::{GalleryQuery, SortOrder};
use showcase_ui::stores::gallery::{GalleryState, GalleryStateStoreExt};
use showcase_ui::GalleryView;
use tracing::debug;

#[component]
pub fn Home() -> Element {
    rsx! {
        HomeVideoGallery {}
    }
}

#[component]
pub fn HomeVideoGallery() -> Element {
    let session = use_session_user();
    let mut flash = use_flash();
    let state = use_store(GalleryState::default);
    use_effect(move || {
        if let Some(message) = flash.take() {
            state.notice().set(Some(message));
        }
    });

    rsx! {
        GalleryView {
            state,
            is_admin: session.is_admin(),
            on_search: move |search: String| state.query().write().search = search,
            on_category: move |category: String| state.query().write().category = category,
            on_sort: move |sort: SortOrder| state.query().write().sort = sort,
            on_clear_filters: move |_| state.query().set(GalleryQuery::default()),
            on_layout: move |layout| {
                debug!("Gallery layout set to {layout:?}");
                state.layout().set(layout);
            },
            on_play: move |id: u32| state.active_video().set(Some(id)),
            on_close_player: move |_| state.active_video().set(None),
            on_dismiss_notice: move |_| state.notice().set(None),
        }
    }
}
