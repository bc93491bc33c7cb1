use crate::components::icons::{CalendarIcon, EyeIcon, PlayIcon, TagIcon};
use crate::components::FallbackImage;
use dioxus::prelude::*;
use showcase_common::catalog::GalleryVideo;
use showcase_common::gallery::LayoutType;

fn aspect_class(layout: LayoutType) -> &'static str {
    match layout {
        LayoutType::Standard => "aspect-[3/4]",
        LayoutType::Compact => "aspect-video",
        LayoutType::Detailed => "aspect-[4/5]",
    }
}

#[component]
pub fn VideoCard(video: GalleryVideo, layout: LayoutType, on_play: EventHandler<u32>) -> Element {
    let id = video.id;
    let aspect = aspect_class(layout);
    let date = video.date_label();
    let views = video.views_label();

    rsx! {
        div {
            class: "relative group cursor-pointer overflow-hidden rounded-lg bg-gray-900 border border-gray-800 transition-transform duration-300 hover:scale-105 {aspect}",
            role: "button",
            tabindex: "0",
            aria_label: "Play {video.title}",
            onclick: move |_| on_play.call(id),
            onkeydown: move |evt| {
                if evt.key() == Key::Enter {
                    on_play.call(id);
                }
            },
            FallbackImage {
                src: video.thumbnail.to_string(),
                alt: video.title.to_string(),
                class: Some("w-full h-full object-cover".to_string()),
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-60 group-hover:opacity-80 transition-opacity" }
            div { class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity",
                div { class: "w-16 h-16 bg-blue-600/90 rounded-full flex items-center justify-center",
                    PlayIcon { class: "w-6 h-6 text-white" }
                }
            }
            if !video.duration.is_empty() {
                span { class: "absolute top-3 right-3 bg-black/70 text-white text-xs px-2 py-1 rounded",
                    "{video.duration}"
                }
            }
            if video.is_new {
                span { class: "absolute top-3 left-3 bg-blue-600 text-white text-xs px-2 py-1 rounded font-medium",
                    "NEW"
                }
            }
            div { class: "absolute bottom-0 inset-x-0 p-4 text-white",
                h3 { class: "font-semibold text-lg mb-1 line-clamp-2 group-hover:text-blue-400 transition-colors",
                    "{video.title}"
                }
                if layout != LayoutType::Compact {
                    p { class: "text-sm text-gray-300 mb-2 line-clamp-2", "{video.description}" }
                    div { class: "flex items-center gap-4 text-xs text-gray-400",
                        span { class: "flex items-center gap-1",
                            TagIcon { class: "w-3 h-3" }
                            "{video.category}"
                        }
                        span { class: "flex items-center gap-1",
                            EyeIcon { class: "w-3 h-3" }
                            "{views}"
                        }
                        span { class: "flex items-center gap-1",
                            CalendarIcon { class: "w-3 h-3" }
                            "{date}"
                        }
                    }
                }
            }
        }
    }
}
