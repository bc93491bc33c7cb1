use super::go_to;
use crate::context::use_services;
use dioxus::prelude::*;
use showcase_common::player::{resolve, PlayerError, PlayerQuery, ResolvedVideo};
use showcase_ui::timing::{sleep_ms, use_task_slot};
use showcase_ui::{LoadingSpinner, VideoErrorView, VideoPlayer};
use tracing::warn;

const GALLERY_ROUTE: &str = "/home-video-gallery";

#[derive(Clone, Debug, PartialEq)]
enum PlayerPage {
    Loading,
    Ready(ResolvedVideo),
    Failed(PlayerError),
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn FullScreenVideoPlayer(
    id: String,
    src: String,
    title: String,
    description: String,
) -> Element {
    let services = use_services();
    let latency = services.config.latency.clone();
    let mut page = use_signal(|| PlayerPage::Loading);
    let mut loader = use_task_slot();

    let query = PlayerQuery {
        id: non_empty(id),
        src: non_empty(src),
        title: non_empty(title),
        description: non_empty(description),
    };

    let load = use_callback(move |(query, delay_ms): (PlayerQuery, u64)| {
        page.set(PlayerPage::Loading);
        let mut slot = loader;
        loader.start(async move {
            sleep_ms(delay_ms).await;
            match resolve(&query) {
                Ok(video) => page.set(PlayerPage::Ready(video)),
                Err(e) => {
                    warn!("Player could not resolve {query:?}: {e}");
                    page.set(PlayerPage::Failed(e));
                }
            }
            slot.finish();
        });
    });

    let load_ms = latency.player_load_ms;
    use_effect(use_reactive((&query,), move |(query,)| {
        load.call((query, load_ms));
    }));

    let retry_query = query.clone();
    let retry_ms = latency.player_retry_ms;

    match page() {
        PlayerPage::Loading => rsx! {
            LoadingSpinner { message: "Loading video...", full_screen: true }
        },
        PlayerPage::Failed(error) => rsx! {
            VideoErrorView {
                message: error.to_string(),
                on_retry: move |_| load.call((retry_query.clone(), retry_ms)),
                on_close: move |_| go_to(GALLERY_ROUTE),
            }
        },
        PlayerPage::Ready(video) => rsx! {
            div { class: "fixed inset-0 bg-black",
                VideoPlayer {
                    key: "{video.src}",
                    src: video.src,
                    title: video.title,
                    description: video.description,
                    on_close: move |_| go_to(GALLERY_ROUTE),
                }
            }
        },
    }
}
