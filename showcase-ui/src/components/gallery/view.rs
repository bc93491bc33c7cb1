//! Gallery page body - pure rendering over `ReadStore<GalleryState>`

use super::hero::GALLERY_ANCHOR;
use super::{FilterBar, HeroSection, LayoutSelector, VideoCard};
use crate::components::icons::{LayoutGridIcon, SearchIcon};
use crate::components::video::VideoModalView;
use crate::components::SuccessBanner;
use crate::stores::gallery::{GalleryState, GalleryStateStoreExt};
use dioxus::prelude::*;
use showcase_common::catalog::{featured_video, GALLERY_VIDEOS};
use showcase_common::gallery::{LayoutType, SortOrder};

fn grid_class(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::Standard => {
            "grid gap-6 w-full grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5"
        }
        LayoutType::Compact => {
            "grid gap-6 w-full grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"
        }
        LayoutType::Detailed => "grid gap-6 w-full grid-cols-1 sm:grid-cols-2 lg:grid-cols-3",
    }
}

#[component]
pub fn GalleryView(
    state: ReadStore<GalleryState>,
    is_admin: bool,
    on_search: EventHandler<String>,
    on_category: EventHandler<String>,
    on_sort: EventHandler<SortOrder>,
    on_clear_filters: EventHandler<()>,
    on_layout: EventHandler<LayoutType>,
    on_play: EventHandler<u32>,
    on_close_player: EventHandler<()>,
    on_dismiss_notice: EventHandler<()>,
) -> Element {
    let query = state.query().read().clone();
    let layout = *state.layout().read();
    let active_video = *state.active_video().read();
    let notice = state.notice().read().clone();

    let videos: Vec<_> = query.apply(GALLERY_VIDEOS).into_iter().cloned().collect();
    let result_count = videos.len();
    let playing = active_video.and_then(|id| GALLERY_VIDEOS.iter().find(|v| v.id == id));

    rsx! {
        div { class: "w-full",
            if let Some(message) = notice {
                div { class: "fixed top-20 left-1/2 -translate-x-1/2 z-50 w-full max-w-md px-4",
                    SuccessBanner { message, on_dismiss: move |_| on_dismiss_notice.call(()) }
                }
            }
            if let Some(featured) = featured_video() {
                HeroSection { video: featured.clone(), on_play }
            }
            div {
                id: GALLERY_ANCHOR,
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 pt-16",
                FilterBar {
                    query: query.clone(),
                    result_count,
                    on_search,
                    on_category,
                    on_sort,
                    on_clear: on_clear_filters,
                }
                div { class: "flex items-center justify-between mb-6",
                    div {
                        h2 { class: "text-2xl font-bold text-white", "Portfolio Gallery" }
                        p { class: "text-gray-400 mt-1",
                            "Discover our latest UX design projects and case studies"
                        }
                    }
                    button {
                        r#type: "button",
                        class: "md:hidden p-2 rounded-md bg-gray-800 text-gray-400 hover:text-white",
                        aria_label: "Toggle layout",
                        onclick: move |_| on_layout.call(layout.toggled()),
                        LayoutGridIcon { class: "w-5 h-5" }
                    }
                }
                if videos.is_empty() {
                    div { class: "text-center py-16",
                        div { class: "w-24 h-24 bg-gray-800 rounded-full flex items-center justify-center mx-auto mb-4",
                            SearchIcon { class: "w-8 h-8 text-gray-500" }
                        }
                        h3 { class: "text-xl font-semibold text-white mb-2", "No Videos Found" }
                        p { class: "text-gray-400 max-w-md mx-auto",
                            "Try adjusting your search criteria or browse all categories to discover our portfolio."
                        }
                    }
                } else {
                    div { class: grid_class(layout),
                        for video in videos {
                            VideoCard {
                                key: "{video.id}",
                                video,
                                layout,
                                on_play,
                            }
                        }
                    }
                }
            }
            if is_admin {
                LayoutSelector { current: layout, on_change: on_layout }
            }
            if let Some(video) = playing {
                VideoModalView {
                    key: "{video.video_url}",
                    src: video.video_url.to_string(),
                    title: video.title.to_string(),
                    description: video.description.to_string(),
                    on_close: on_close_player,
                }
            }
        }
    }
}
