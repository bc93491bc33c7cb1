use dioxus::prelude::*;

pub const FALLBACK_IMAGE: &str = "/assets/no_image.svg";

/// `<img>` that swaps to a placeholder once its source fails to load
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[props(default)] class: Option<String>,
) -> Element {
    // Remembers which source failed so a new `src` gets a fresh attempt
    let mut failed_src = use_signal(|| None::<String>);
    let shown = if failed_src.read().as_deref() == Some(src.as_str()) {
        FALLBACK_IMAGE.to_string()
    } else {
        src.clone()
    };

    rsx! {
        img {
            class: class.as_deref(),
            src: "{shown}",
            alt: "{alt}",
            loading: "lazy",
            onerror: move |_| {
                if failed_src.peek().as_deref() != Some(src.as_str()) {
                    failed_src.set(Some(src.clone()));
                }
            },
        }
    }
}
