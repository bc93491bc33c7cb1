use crate::components::video::VideoPlayer;
use dioxus::prelude::*;

/// Full-viewport overlay around a [`VideoPlayer`]
#[component]
pub fn VideoModalView(
    src: String,
    title: String,
    #[props(default)] description: String,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black flex items-center justify-center",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{title}",
            div { class: "w-full h-full",
                VideoPlayer {
                    src,
                    title: title.clone(),
                    description,
                    on_close,
                }
            }
        }
    }
}
