use super::go_to;
use dioxus::prelude::*;
use showcase_ui::NotFoundView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFoundView { path, on_home: move |_| go_to("/home-video-gallery") }
    }
}
