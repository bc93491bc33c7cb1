use super::go_to;
use crate::storage::load_preview;
use dioxus::prelude::*;
use showcase_ui::PreviewView;
use tracing::debug;

#[component]
pub fn Preview(slug: String) -> Element {
    let data = use_hook(load_preview);
    if let Some(stored) = &data {
        if stored.slug != slug {
            debug!("Preview data is for {}, showing it under {slug}", stored.slug);
        }
    }

    rsx! {
        PreviewView { slug, data, on_close: move |_| go_to("/") }
    }
}
