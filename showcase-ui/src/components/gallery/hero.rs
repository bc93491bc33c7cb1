use crate::components::icons::{ChevronDownIcon, InfoIcon, PlayIcon, VolumeIcon, VolumeMutedIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::wasm_utils::{scroll_into_view, use_media_handle};
use dioxus::prelude::*;
use showcase_common::catalog::GalleryVideo;

pub const GALLERY_ANCHOR: &str = "video-gallery";
const HERO_POSTER: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1200&h=800&fit=crop";

/// Full-height banner with the featured video looping muted behind it
#[component]
pub fn HeroSection(video: GalleryVideo, on_play: EventHandler<u32>) -> Element {
    let mut media = use_media_handle();
    let mut muted = use_signal(|| true);
    let video_id = video.id;
    let mute_label = if muted() { "Unmute video" } else { "Mute video" };

    rsx! {
        div { class: "relative w-full h-screen overflow-hidden",
            div { class: "absolute inset-0",
                video {
                    class: "w-full h-full object-cover",
                    src: video.video_url,
                    poster: video.hero_image.unwrap_or(HERO_POSTER),
                    autoplay: true,
                    r#loop: true,
                    muted: true,
                    playsinline: true,
                    preload: "metadata",
                    onmounted: move |evt| {
                        media.attach(&evt.data());
                        media.set_muted(true);
                        media.play();
                    },
                }
                div { class: "absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-black/90" }
                div { class: "absolute inset-0 bg-gradient-to-r from-black/60 via-transparent to-transparent" }
            }
            div { class: "absolute top-20 right-4 z-10",
                ChromelessButton {
                    class: Some("bg-black/50 hover:bg-black/70 text-white p-3 rounded-full transition-colors".to_string()),
                    aria_label: Some(mute_label.to_string()),
                    onclick: move |_| {
                        let next = !muted();
                        media.set_muted(next);
                        muted.set(next);
                    },
                    if muted() {
                        VolumeMutedIcon { class: "w-5 h-5" }
                    } else {
                        VolumeIcon { class: "w-5 h-5" }
                    }
                }
            }
            div { class: "relative h-full flex items-center z-10",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 w-full",
                    div { class: "max-w-2xl",
                        h1 { class: "text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-8",
                            "Built to Deliver - EDX Future Vision"
                        }
                        div { class: "flex items-center gap-4",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Large,
                                onclick: move |_| on_play.call(video_id),
                                PlayIcon { class: "w-5 h-5" }
                                "Watch Now"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Large,
                                onclick: move |_| scroll_into_view(GALLERY_ANCHOR),
                                InfoIcon { class: "w-5 h-5" }
                                "More Info"
                            }
                        }
                    }
                }
            }
            ChromelessButton {
                class: Some("absolute bottom-6 left-1/2 -translate-x-1/2 animate-bounce text-white/60".to_string()),
                aria_label: Some("Scroll to video gallery".to_string()),
                onclick: move |_| scroll_into_view(GALLERY_ANCHOR),
                ChevronDownIcon { class: "w-6 h-6" }
            }
        }
    }
}
